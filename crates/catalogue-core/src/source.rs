use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{CatalogueError, Result};
use crate::paths::{category_metadata_path, index_path, subject_works_path};

/// Address of one immutable document in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    Index,
    CategoryMetadata {
        path: String,
    },
    SubjectWorks {
        category_path: String,
        thinker: String,
        subject: String,
    },
}

impl Display for DocumentKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index => f.write_str("index"),
            Self::CategoryMetadata { path } => write!(f, "{path}/metadata"),
            Self::SubjectWorks {
                category_path,
                thinker,
                subject,
            } => write!(f, "{category_path}/{thinker}/{subject}"),
        }
    }
}

/// Read access to the record store. Implementations return the raw document
/// text and report an absent document as `CatalogueError::MissingDocument`.
#[async_trait]
pub trait DocumentSource: Send + Sync + std::fmt::Debug {
    async fn read_document(&self, key: &DocumentKey) -> Result<String>;
}

/// Record store laid out as `index.json`, `<path>/metadata.json` and
/// `<path>/<thinker>/<subject>.json` under one root directory.
#[derive(Debug, Clone)]
pub struct FolderSource {
    root: PathBuf,
}

impl FolderSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, key: &DocumentKey) -> Result<PathBuf> {
        match key {
            DocumentKey::Index => Ok(index_path(&self.root)),
            DocumentKey::CategoryMetadata { path } => category_metadata_path(&self.root, path),
            DocumentKey::SubjectWorks {
                category_path,
                thinker,
                subject,
            } => subject_works_path(&self.root, category_path, thinker, subject),
        }
    }
}

#[async_trait]
impl DocumentSource for FolderSource {
    async fn read_document(&self, key: &DocumentKey) -> Result<String> {
        let path = self.resolve(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(CatalogueError::MissingDocument(path.display().to_string()))
            }
            Err(err) => Err(CatalogueError::DataUnavailable(format!(
                "{}: {err}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn folder_source_reads_existing_documents() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("index.json"), r#"{"categories":[]}"#).expect("seed index");
        let source = FolderSource::new(temp.path());

        let raw = source
            .read_document(&DocumentKey::Index)
            .await
            .expect("read index");
        assert_eq!(raw, r#"{"categories":[]}"#);
    }

    #[tokio::test]
    async fn folder_source_reports_missing_documents() {
        let temp = tempdir().expect("tempdir");
        let source = FolderSource::new(temp.path());

        let err = source
            .read_document(&DocumentKey::SubjectWorks {
                category_path: "anarchists".to_string(),
                thinker: "Bill Haywood".to_string(),
                subject: "Letters".to_string(),
            })
            .await
            .expect_err("must be missing");
        assert!(err.is_missing_document());
    }

    #[tokio::test]
    async fn folder_source_rejects_traversal_segments() {
        let temp = tempdir().expect("tempdir");
        let source = FolderSource::new(temp.path());

        let err = source
            .read_document(&DocumentKey::CategoryMetadata {
                path: "..".to_string(),
            })
            .await
            .expect_err("must reject");
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[test]
    fn document_key_display_names_the_document() {
        let key = DocumentKey::SubjectWorks {
            category_path: "anarchists".to_string(),
            thinker: "Bill Haywood".to_string(),
            subject: "Letters".to_string(),
        };
        assert_eq!(key.to_string(), "anarchists/Bill Haywood/Letters");
    }
}
