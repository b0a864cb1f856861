use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::OnceCell;

use crate::error::{CatalogueError, Result};
use crate::models::{CacheStats, CatalogueIndex, ThinkerMetadata};

type IndexCell = Arc<OnceCell<Arc<CatalogueIndex>>>;
type CategoryCell = Arc<OnceCell<Arc<Vec<ThinkerMetadata>>>>;

/// Process-lifetime memo of the index document and per-path category metadata.
///
/// Each key owns a single-flight cell: concurrent first readers of one path
/// share a single load, failed loads leave no entry behind, and nothing is
/// evicted until `clear`.
#[derive(Debug, Default)]
pub struct MetadataCache {
    index: RwLock<IndexCell>,
    categories: RwLock<HashMap<String, CategoryCell>>,
    loads: AtomicU64,
}

impl MetadataCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn index_or_load<F, Fut>(&self, load: F) -> Result<Arc<CatalogueIndex>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<CatalogueIndex>>,
    {
        let cell = self
            .index
            .read()
            .map_err(|_| lock_poisoned("index cache"))?
            .clone();
        cell.get_or_try_init(|| async {
            self.loads.fetch_add(1, Ordering::Relaxed);
            load().await.map(Arc::new)
        })
        .await
        .cloned()
    }

    pub async fn category_or_load<F, Fut>(
        &self,
        path: &str,
        load: F,
    ) -> Result<Arc<Vec<ThinkerMetadata>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<ThinkerMetadata>>>,
    {
        let cell = self.category_cell(path)?;
        let loaded = cell
            .get_or_try_init(|| async {
                self.loads.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(category_path = path, "loading category metadata");
                load().await.map(Arc::new)
            })
            .await
            .cloned();
        if loaded.is_err() {
            self.forget_empty_cell(path, &cell);
        }
        loaded
    }

    #[must_use]
    pub fn cached_category(&self, path: &str) -> Option<Arc<Vec<ThinkerMetadata>>> {
        self.categories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .and_then(|cell| cell.get().cloned())
    }

    /// Drop every memoised document; the next reads go back to the source.
    pub fn clear(&self) {
        *self.index.write().unwrap_or_else(PoisonError::into_inner) = IndexCell::default();
        self.categories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let cached_categories = self
            .categories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|cell| cell.initialized())
            .count();
        let index_loaded = self
            .index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .initialized();
        CacheStats {
            cached_categories,
            index_loaded,
            document_loads: self.loads.load(Ordering::Relaxed),
        }
    }

    fn category_cell(&self, path: &str) -> Result<CategoryCell> {
        if let Some(cell) = self
            .categories
            .read()
            .map_err(|_| lock_poisoned("category cache"))?
            .get(path)
        {
            return Ok(cell.clone());
        }
        let mut categories = self
            .categories
            .write()
            .map_err(|_| lock_poisoned("category cache"))?;
        Ok(categories.entry(path.to_string()).or_default().clone())
    }

    // Keys come from callers, so a failed load must not leave its cell behind.
    fn forget_empty_cell(&self, path: &str, cell: &CategoryCell) {
        let mut categories = self
            .categories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if categories
            .get(path)
            .is_some_and(|current| Arc::ptr_eq(current, cell) && !current.initialized())
        {
            categories.remove(path);
        }
    }

    #[cfg(test)]
    fn category_slots(&self) -> usize {
        self.categories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

fn lock_poisoned(name: &str) -> CatalogueError {
    CatalogueError::DataUnavailable(format!("{name} lock poisoned"))
}
