#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualWindow {
    pub start: usize,
    pub end: usize,
    pub top_pad: f32,
    pub bottom_pad: f32,
}

impl VirtualWindow {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub fn virtual_window(
    total: usize,
    row_height: f32,
    viewport_height: f32,
    scroll_offset: f32,
    buffer: usize,
) -> VirtualWindow {
    if total == 0 {
        return VirtualWindow {
            start: 0,
            end: 0,
            top_pad: 0.0,
            bottom_pad: 0.0,
        };
    }

    let row_height = row_height.max(1.0);
    // Offsets past the end of the track would put start beyond end.
    let max_start = total.saturating_sub(1);
    let mut first_visible = (scroll_offset.max(0.0) / row_height).floor() as usize;
    if first_visible > max_start {
        first_visible = max_start;
    }

    let start = first_visible.saturating_sub(buffer);
    let visible = (viewport_height / row_height).ceil() as usize;
    let end = (start + visible + buffer * 2).min(total);

    VirtualWindow {
        start,
        end,
        top_pad: start as f32 * row_height,
        bottom_pad: total.saturating_sub(end) as f32 * row_height,
    }
}
