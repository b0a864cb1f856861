use crate::error::Result;
use crate::models::{CatalogueStats, ComparisonReport, SearchRequest, SearchResults, Thinker};
use crate::search::{compare_thinkers, compute_statistics, parse_name_list, pick_random, search_corpus};

use super::Catalogue;

impl Catalogue {
    /// Search the corpus with the configured algorithm. The request is
    /// validated before any document is read.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        if request.is_empty() {
            return search_corpus(&[], request, self.search_mode);
        }
        let thinkers = self.load_all_thinkers_metadata().await?;
        search_corpus(&thinkers, request, self.search_mode)
    }

    pub async fn random_thinker(&self, category: Option<&str>) -> Result<Thinker> {
        let thinkers = self.load_all_thinkers_metadata().await?;
        pick_random(&thinkers, category, &mut rand::thread_rng())
    }

    /// Compare thinkers named in a comma-separated list.
    pub async fn compare(&self, names: &str) -> Result<ComparisonReport> {
        let names = parse_name_list(names);
        // Reject short lists without touching the store.
        if names.len() < crate::search::MIN_COMPARE_NAMES {
            return compare_thinkers(&[], &names);
        }
        let thinkers = self.load_all_thinkers_metadata().await?;
        compare_thinkers(&thinkers, &names)
    }

    pub async fn statistics(&self) -> Result<CatalogueStats> {
        let (thinkers, index) = tokio::join!(
            self.load_all_thinkers_metadata(),
            self.load_category_index()
        );
        Ok(compute_statistics(&thinkers?, index?.categories.len()))
    }
}
