use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: String,
    pub validated: bool,
    pub content: String,
    pub quantity: i64,
    pub instances: Vec<i64>,
    pub metadata: RowMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowMetadata {
    pub inspected: bool,
    pub inspect_timestamp: Option<String>,
}
