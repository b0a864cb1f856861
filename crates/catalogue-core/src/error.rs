use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogueError>;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    #[error("document not found: {0}")]
    MissingDocument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CatalogueError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataUnavailable(_) => "DATA_UNAVAILABLE",
            Self::MissingDocument(_) => "MISSING_DOCUMENT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// True for the "document does not exist" condition that accessors are
    /// allowed to treat as an empty result.
    #[must_use]
    pub fn is_missing_document(&self) -> bool {
        match self {
            Self::MissingDocument(_) => true,
            Self::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// True when the failure belongs to the `DataUnavailable` class: missing,
    /// unreadable or malformed documents and expired read budgets.
    #[must_use]
    pub const fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            Self::DataUnavailable(_) | Self::MissingDocument(_) | Self::Io(_) | Self::Json(_)
        )
    }
}
