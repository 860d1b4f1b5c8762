use std::collections::HashSet;

use crate::model::Row;

pub fn parse_rows(json: &str) -> Result<Vec<Row>, String> {
    let rows: Vec<Row> = serde_json::from_str(json).map_err(|err| format!("parse dataset: {err}"))?;

    // Row ids are the stable render key, so duplicates are a load error.
    let mut seen = HashSet::new();
    for row in &rows {
        if !seen.insert(row.id.as_str()) {
            return Err(format!("duplicate row id: {}", row.id));
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_data_001_parse_rows_from_camel_case_json() {
        let json = r#"[
            {
                "id": "duct-l1-004",
                "validated": true,
                "content": "https://example.com/scans/duct-l1-004.png",
                "quantity": 12,
                "instances": [3, 5, 9],
                "metadata": { "inspected": true, "inspectTimestamp": "2024-11-03T14:22:09Z" }
            },
            {
                "id": "pipe-l2-017",
                "validated": false,
                "content": "Copper riser, 40mm",
                "quantity": 4,
                "instances": [],
                "metadata": { "inspected": false, "inspectTimestamp": null }
            }
        ]"#;

        let rows = parse_rows(json).expect("parse rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "duct-l1-004");
        assert_eq!(rows[0].quantity, 12);
        assert_eq!(rows[0].instances, vec![3, 5, 9]);
        assert_eq!(
            rows[0].metadata.inspect_timestamp.as_deref(),
            Some("2024-11-03T14:22:09Z")
        );
        assert!(!rows[1].validated);
        assert!(rows[1].metadata.inspect_timestamp.is_none());
    }

    #[test]
    fn t_data_002_duplicate_ids_are_rejected() {
        let json = r#"[
            {
                "id": "duct-l1-004",
                "validated": true,
                "content": "a",
                "quantity": 1,
                "instances": [],
                "metadata": { "inspected": false, "inspectTimestamp": null }
            },
            {
                "id": "duct-l1-004",
                "validated": false,
                "content": "b",
                "quantity": 2,
                "instances": [],
                "metadata": { "inspected": false, "inspectTimestamp": null }
            }
        ]"#;

        let err = parse_rows(json).expect_err("duplicate ids");
        assert!(err.contains("duct-l1-004"));
    }

    #[test]
    fn t_data_003_malformed_json_is_an_error() {
        assert!(parse_rows("not json").is_err());
        assert!(parse_rows(r#"{"id": "x"}"#).is_err());
    }
}
