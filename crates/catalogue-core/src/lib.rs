// Public fallible APIs in this crate share one concrete error contract (`CatalogueError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod audit;
pub mod cache;
pub mod catalogue;
pub mod config;
pub(crate) mod documents;
pub mod error;
pub mod models;
pub mod paths;
pub mod search;
pub mod source;

pub use audit::audit_data_root;
pub use cache::MetadataCache;
pub use catalogue::Catalogue;
pub use config::{CatalogueConfig, SearchMode};
pub use error::{CatalogueError, Result};
pub use source::{DocumentKey, DocumentSource, FolderSource};
