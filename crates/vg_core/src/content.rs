const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

pub fn is_image_url(text: &str) -> bool {
    let Some(rest) = strip_http_scheme(text) else {
        return false;
    };
    let Some((body, ext)) = rest.rsplit_once('.') else {
        return false;
    };
    !body.is_empty()
        && IMAGE_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
}

fn strip_http_scheme(text: &str) -> Option<&str> {
    for scheme in ["http://", "https://"] {
        if let (Some(head), Some(tail)) = (text.get(..scheme.len()), text.get(scheme.len()..)) {
            if head.eq_ignore_ascii_case(scheme) {
                return Some(tail);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_img_001_accepts_http_image_urls() {
        assert!(is_image_url("https://x.com/a.png"));
        assert!(is_image_url("http://x.com/a.jpg"));
        assert!(is_image_url("https://x.com/deep/path/photo.JPEG"));
        assert!(is_image_url("HTTPS://x.com/a.gif"));
        assert!(is_image_url("https://x.com/a.webp"));
        assert!(is_image_url("https://x.com/a.svg"));
    }

    #[test]
    fn t_img_002_rejects_everything_else() {
        assert!(!is_image_url("hello world"));
        assert!(!is_image_url("ftp://x.com/a.png"));
        assert!(!is_image_url("https://x.com/a.pdf"));
        assert!(!is_image_url("https://x.com/a"));
        assert!(!is_image_url("https://.png"));
        assert!(!is_image_url("https://x.com/a.png?size=large"));
        assert!(!is_image_url("a.png"));
        assert!(!is_image_url(""));
    }
}
