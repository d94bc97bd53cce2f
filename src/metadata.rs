use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// Article metadata, as written by the scraper next to the raw text.
///
/// Every field is optional since the schema is owned by the scraper:
/// unknown keys are kept in `extra` rather than rejected.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct ArticleMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
