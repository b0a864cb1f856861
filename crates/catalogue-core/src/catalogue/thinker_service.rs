use futures::future::join_all;

use crate::documents::parse_subject_document;
use crate::error::Result;
use crate::models::{Thinker, ThinkerMetadata, Work};
use crate::paths::sanitize_segment;
use crate::source::DocumentKey;

use super::Catalogue;

impl Catalogue {
    /// Metadata entry whose name matches exactly, if the category has one.
    pub async fn find_thinker_metadata(&self, category: &str, name: &str) -> Option<ThinkerMetadata> {
        self.load_category_metadata(category)
            .await
            .iter()
            .find(|record| record.name == name)
            .cloned()
    }

    /// Full thinker with works from every listed subject. Subject files are
    /// read concurrently and concatenated in metadata order; `None` when the
    /// category has no thinker of that name.
    pub async fn load_thinker(&self, category: &str, name: &str) -> Option<Thinker> {
        let path = self.resolve_category_path(category).await;
        let metadata = self.metadata_at(&path).await;
        let record = metadata.iter().find(|record| record.name == name)?;

        let mut thinker = record.expand();
        thinker.works = self.works_for_record(&path, record).await;
        Some(thinker)
    }

    /// Every work of the thinker, without the rest of the record.
    pub async fn load_thinker_works(&self, category: &str, name: &str) -> Vec<Work> {
        let path = self.resolve_category_path(category).await;
        let metadata = self.metadata_at(&path).await;
        match metadata.iter().find(|record| record.name == name) {
            Some(record) => self.works_for_record(&path, record).await,
            None => Vec::new(),
        }
    }

    /// Works of one subject. An absent subject file is an empty list; only a
    /// name that cannot address a file is an error.
    pub async fn load_thinker_works_by_subject(
        &self,
        category: &str,
        name: &str,
        subject: &str,
    ) -> Result<Vec<Work>> {
        sanitize_segment(name)?;
        sanitize_segment(subject)?;
        let path = self.resolve_category_path(category).await;
        Ok(self.subject_works_at(&path, name, subject).await)
    }

    /// Subject names from metadata; never reads work files.
    pub async fn thinker_subjects(&self, category: &str, name: &str) -> Vec<String> {
        self.find_thinker_metadata(category, name)
            .await
            .map(|record| record.subject_names())
            .unwrap_or_default()
    }

    async fn works_for_record(&self, category_path: &str, record: &ThinkerMetadata) -> Vec<Work> {
        let subjects = record.subject_names();
        join_all(
            subjects
                .iter()
                .map(|subject| self.subject_works_at(category_path, &record.name, subject)),
        )
        .await
        .into_iter()
        .flatten()
        .collect()
    }

    async fn subject_works_at(&self, category_path: &str, thinker: &str, subject: &str) -> Vec<Work> {
        let key = DocumentKey::SubjectWorks {
            category_path: category_path.to_string(),
            thinker: thinker.to_string(),
            subject: subject.to_string(),
        };
        let loaded = self
            .fetch(&key)
            .await
            .and_then(|raw| parse_subject_document(&raw, subject));
        match loaded {
            Ok(works) => works,
            Err(err) if err.is_missing_document() => {
                tracing::debug!(
                    category_path,
                    thinker,
                    subject,
                    "subject file absent, treating as no works"
                );
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(
                    category_path,
                    thinker,
                    subject,
                    error = %err,
                    "subject works unavailable, treating as no works"
                );
                Vec::new()
            }
        }
    }
}
