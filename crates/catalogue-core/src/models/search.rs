use serde::{Deserialize, Serialize};

use super::Thinker;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl SearchRequest {
    /// Lowercased, trimmed query; `None` when absent or blank.
    #[must_use]
    pub fn normalized_query(&self) -> Option<String> {
        normalize(self.query.as_deref())
    }

    #[must_use]
    pub fn normalized_category(&self) -> Option<String> {
        normalize(self.category.as_deref())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized_query().is_none() && self.normalized_category().is_none()
    }
}

fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub results: Vec<Thinker>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredThinker {
    pub thinker: Thinker,
    pub score: u32,
}
