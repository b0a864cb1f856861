use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::cache::MetadataCache;
use crate::config::{CatalogueConfig, SearchMode};
use crate::documents::{parse_index_document, parse_metadata_document};
use crate::error::{CatalogueError, Result};
use crate::models::{CacheStats, CatalogueIndex, Thinker, ThinkerMetadata};
use crate::paths::category_folder;
use crate::source::{DocumentKey, DocumentSource, FolderSource};

mod query_service;
mod thinker_service;


/// Read-only access to the thinker catalogue.
///
/// Cloning is cheap; clones share the document source and the metadata cache.
#[derive(Clone)]
pub struct Catalogue {
    source: Arc<dyn DocumentSource>,
    cache: Arc<MetadataCache>,
    fetch_timeout: Duration,
    search_mode: SearchMode,
}

impl std::fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalogue")
            .field("source", &self.source)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("search_mode", &self.search_mode)
            .finish_non_exhaustive()
    }
}

impl Catalogue {
    pub fn new(source: Arc<dyn DocumentSource>, cache: Arc<MetadataCache>) -> Self {
        let defaults = CatalogueConfig::default();
        Self {
            source,
            cache,
            fetch_timeout: defaults.fetch_timeout,
            search_mode: defaults.search_mode,
        }
    }

    /// Folder-backed catalogue with a fresh cache.
    #[must_use]
    pub fn from_config(config: &CatalogueConfig) -> Self {
        Self::new(
            Arc::new(FolderSource::new(config.data_root.clone())),
            Arc::new(MetadataCache::new()),
        )
        .with_fetch_timeout(config.fetch_timeout)
        .with_search_mode(config.search_mode)
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    #[must_use]
    pub const fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::info!("catalogue metadata cache cleared");
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    async fn fetch(&self, key: &DocumentKey) -> Result<String> {
        match tokio::time::timeout(self.fetch_timeout, self.source.read_document(key)).await {
            Ok(result) => result,
            Err(_) => Err(CatalogueError::DataUnavailable(format!(
                "read of {key} exceeded {}ms",
                self.fetch_timeout.as_millis()
            ))),
        }
    }

    /// Index document, loaded once and memoised.
    pub async fn load_category_index(&self) -> Result<Arc<CatalogueIndex>> {
        self.cache
            .index_or_load(|| async {
                let raw = self.fetch(&DocumentKey::Index).await?;
                parse_index_document(&raw)
            })
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "catalogue index unavailable");
                match err {
                    unavailable @ CatalogueError::DataUnavailable(_) => unavailable,
                    other => CatalogueError::DataUnavailable(format!("catalogue index: {other}")),
                }
            })
    }

    pub async fn available_categories(&self) -> Result<Vec<String>> {
        let index = self.load_category_index().await?;
        Ok(index
            .categories
            .iter()
            .map(|category| category.id.clone())
            .collect())
    }

    /// Storage path for a category id, display name or path. Unknown keys are
    /// used verbatim.
    pub async fn resolve_category_path(&self, key: &str) -> String {
        match self.load_category_index().await {
            Ok(index) => resolve_in_index(&index, key).unwrap_or_else(|| key.to_string()),
            Err(_) => key.to_string(),
        }
    }

    /// Compact metadata for one category. Unknown or unreadable categories
    /// yield an empty list.
    pub async fn load_category_metadata(&self, key: &str) -> Arc<Vec<ThinkerMetadata>> {
        let path = self.resolve_category_path(key).await;
        self.metadata_at(&path).await
    }

    pub async fn load_category_thinkers_metadata(&self, key: &str) -> Vec<Thinker> {
        self.load_category_metadata(key)
            .await
            .iter()
            .map(ThinkerMetadata::expand)
            .collect()
    }

    /// Every thinker of every indexed category, metadata only. Categories are
    /// loaded concurrently and flattened in index order.
    pub async fn load_all_thinkers_metadata(&self) -> Result<Vec<Thinker>> {
        let index = self.load_category_index().await?;
        let per_category = join_all(
            index
                .categories
                .iter()
                .map(|category| self.metadata_at(&category.path)),
        )
        .await;
        Ok(per_category
            .iter()
            .flat_map(|records| records.iter().map(ThinkerMetadata::expand))
            .collect())
    }

    async fn metadata_at(&self, path: &str) -> Arc<Vec<ThinkerMetadata>> {
        let key = DocumentKey::CategoryMetadata {
            path: path.to_string(),
        };
        let loaded = self
            .cache
            .category_or_load(path, || async {
                let raw = self.fetch(&key).await?;
                parse_metadata_document(&raw)
            })
            .await;
        match loaded {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    category_path = path,
                    error = %err,
                    "category metadata unavailable, serving no thinkers"
                );
                Arc::default()
            }
        }
    }
}

pub(crate) fn resolve_in_index(index: &CatalogueIndex, key: &str) -> Option<String> {
    let categories = &index.categories;
    if let Some(category) = categories.iter().find(|c| c.path == key) {
        return Some(category.path.clone());
    }
    if let Some(category) = categories.iter().find(|c| c.id == key) {
        return Some(category.path.clone());
    }
    let lowered = key.to_lowercase();
    if let Some(category) = categories.iter().find(|c| {
        c.id.to_lowercase() == lowered
            || c.name.to_lowercase() == lowered
            || c.path.to_lowercase() == lowered
    }) {
        return Some(category.path.clone());
    }
    let slug = category_folder(key);
    categories
        .iter()
        .find(|c| !slug.is_empty() && c.path == slug)
        .map(|category| category.path.clone())
}
