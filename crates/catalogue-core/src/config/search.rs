use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, Result};

pub(super) const ENV_SEARCH_MODE: &str = "CATALOGUE_SEARCH_MODE";

/// Matching algorithm used by the HTTP search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Rank by the fixed name/category/description heuristic.
    #[default]
    Scored,
    /// Keep corpus order, any field containing the query qualifies.
    Substring,
}

impl SearchMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scored => "scored",
            Self::Substring => "substring",
        }
    }

    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let normalized = raw.map(|value| value.trim().to_ascii_lowercase());
        match normalized.as_deref() {
            None | Some("") | Some("scored") => Ok(Self::Scored),
            Some("substring") => Ok(Self::Substring),
            Some(other) => Err(CatalogueError::InvalidConfig(format!(
                "invalid {ENV_SEARCH_MODE}: {other} (expected scored|substring)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_mode_defaults_to_scored() {
        assert_eq!(SearchMode::parse(None).expect("default"), SearchMode::Scored);
        assert_eq!(
            SearchMode::parse(Some("  ")).expect("blank"),
            SearchMode::Scored
        );
    }

    #[test]
    fn search_mode_parse_is_case_insensitive() {
        assert_eq!(
            SearchMode::parse(Some("SubString")).expect("substring"),
            SearchMode::Substring
        );
    }

    #[test]
    fn search_mode_rejects_unknown_value() {
        let err = SearchMode::parse(Some("fuzzy")).expect_err("must reject");
        assert_eq!(err.code(), "INVALID_CONFIG");
        assert!(!err.is_data_unavailable());
    }
}
