use serde::{Deserialize, Serialize};

use catalogue_core::models::{Category, Thinker};

/// Fixed response envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiEnvelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogueResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryThinkersResponse {
    pub category: String,
    pub thinkers: Vec<Thinker>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ThinkersResponse {
    pub thinkers: Vec<Thinker>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ThinkerQuery {
    pub metadata_only: Option<String>,
}

impl ThinkerQuery {
    pub fn metadata_only(&self) -> bool {
        self.metadata_only.as_deref() == Some("true")
    }
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub thinkers: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    pub category: Option<String>,
}
