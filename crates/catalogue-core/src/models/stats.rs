use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub name: String,
    pub thinkers: usize,
    pub works: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProlificThinker {
    pub name: String,
    pub category: String,
    pub works: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueStats {
    pub total_thinkers: usize,
    pub total_works: u64,
    pub total_categories: usize,
    pub average_works_per_thinker: u64,
    pub top_categories: Vec<CategoryStat>,
    pub most_prolific_thinkers: Vec<ProlificThinker>,
    pub last_updated: String,
}
