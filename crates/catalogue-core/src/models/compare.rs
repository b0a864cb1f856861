use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub name: String,
    pub category: String,
    pub description: String,
    pub works: u64,
    pub subjects: usize,
    pub subject_list: Vec<String>,
    pub major_works: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub comparison: Vec<ComparisonEntry>,
    pub shared_subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_found: Option<Vec<String>>,
}
