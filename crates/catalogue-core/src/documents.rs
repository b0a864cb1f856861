use serde::Deserialize;

use crate::error::{CatalogueError, Result};
use crate::models::{CatalogueIndex, METADATA_FORMAT_VERSION, ThinkerMetadata, Work};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MetadataDocument {
    Bare(Vec<ThinkerMetadata>),
    Versioned {
        version: u32,
        thinkers: Vec<ThinkerMetadata>,
    },
}

pub fn parse_index_document(raw: &str) -> Result<CatalogueIndex> {
    serde_json::from_str::<CatalogueIndex>(raw).map_err(CatalogueError::from)
}

pub fn parse_metadata_document(raw: &str) -> Result<Vec<ThinkerMetadata>> {
    match serde_json::from_str::<MetadataDocument>(raw)? {
        MetadataDocument::Bare(thinkers) => Ok(thinkers),
        MetadataDocument::Versioned { version, thinkers } => {
            if version != METADATA_FORMAT_VERSION {
                return Err(CatalogueError::DataUnavailable(format!(
                    "unsupported metadata format version {version} (expected {METADATA_FORMAT_VERSION})"
                )));
            }
            Ok(thinkers)
        }
    }
}

/// Parse a subject file, tagging works that do not name their subject.
pub fn parse_subject_document(raw: &str, subject: &str) -> Result<Vec<Work>> {
    let mut works = serde_json::from_str::<Vec<Work>>(raw)?;
    for work in &mut works {
        if work.subject.is_none() {
            work.subject = Some(subject.to_string());
        }
    }
    Ok(works)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_document_accepts_bare_array() {
        let thinkers = parse_metadata_document(r#"[{"n": "A", "c": "X", "w": 1}]"#)
            .expect("bare array");
        assert_eq!(thinkers.len(), 1);
        assert_eq!(thinkers[0].name, "A");
    }

    #[test]
    fn metadata_document_accepts_versioned_envelope() {
        let thinkers =
            parse_metadata_document(r#"{"version": 1, "thinkers": [{"n": "A", "c": "X"}]}"#)
                .expect("versioned");
        assert_eq!(thinkers.len(), 1);
    }

    #[test]
    fn metadata_document_rejects_unknown_version() {
        let err = parse_metadata_document(r#"{"version": 7, "thinkers": []}"#)
            .expect_err("must reject");
        assert_eq!(err.code(), "DATA_UNAVAILABLE");
    }

    #[test]
    fn metadata_document_rejects_untyped_objects() {
        let err = parse_metadata_document(r#"{"thinkers": "nope"}"#).expect_err("must reject");
        assert_eq!(err.code(), "JSON_ERROR");
    }

    #[test]
    fn subject_document_tags_works_with_subject_name() {
        let works = parse_subject_document(
            r#"[{"title": "Capital", "url": "u1"}, {"title": "Grundrisse", "url": "u2", "subject": "Drafts"}]"#,
            "Economics",
        )
        .expect("works");
        assert_eq!(works[0].subject.as_deref(), Some("Economics"));
        assert_eq!(works[1].subject.as_deref(), Some("Drafts"));
    }
}
