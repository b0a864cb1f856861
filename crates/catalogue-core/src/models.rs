use serde::{Deserialize, Deserializer, Serialize};

mod audit;
mod compare;
mod record;
mod search;
mod stats;

pub use audit::{AuditReport, IndexCountDrift, SubjectCountDrift, WorkCountDrift};
pub use compare::{ComparisonEntry, ComparisonReport};
pub use record::{METADATA_FORMAT_VERSION, SubjectEntry, Thinker, ThinkerMetadata};
pub use search::{ScoredThinker, SearchRequest, SearchResults};
pub use stats::{CatalogueStats, CategoryStat, ProlificThinker};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogueIndex {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(
        default,
        deserialize_with = "year_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkerSubjects {
    pub category: String,
    pub name: String,
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectWorks {
    pub category: String,
    pub thinker: String,
    pub subject: String,
    pub works: Vec<Work>,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub cached_categories: usize,
    pub index_loaded: bool,
    pub document_loads: u64,
}

// Generated subject files carry years both as strings and as bare numbers.
fn year_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(
        Option::<Year>::deserialize(deserializer)?.map(|year| match year {
            Year::Text(text) => text,
            Year::Number(number) => number.to_string(),
        }),
    )
}
