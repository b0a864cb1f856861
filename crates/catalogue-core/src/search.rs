//! In-memory filtering, ranking, comparison and aggregation over a thinker
//! corpus. Everything here is synchronous and works on already-loaded data.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::SearchMode;
use crate::error::{CatalogueError, Result};
use crate::models::{SearchRequest, SearchResults, Thinker};

mod compare;
mod scoring;
mod stats;


pub use compare::{MIN_COMPARE_NAMES, compare_thinkers, parse_name_list, shared_subjects};
pub use scoring::{
    CATEGORY_CONTAINS_SCORE, DESCRIPTION_CONTAINS_SCORE, EXACT_NAME_SCORE, NAME_CONTAINS_SCORE,
    NAME_PREFIX_SCORE, score_thinker, scored_search,
};
pub use stats::{TOP_LIMIT, compute_statistics};

/// Thinkers whose category display name contains `filter`, case-insensitively.
#[must_use]
pub fn filter_by_category(thinkers: &[Thinker], filter: &str) -> Vec<Thinker> {
    let filter = filter.trim().to_lowercase();
    thinkers
        .iter()
        .filter(|thinker| thinker.category.to_lowercase().contains(&filter))
        .cloned()
        .collect()
}

/// Thinkers whose name, description or category contains `query`,
/// case-insensitively, in corpus order.
#[must_use]
pub fn text_search(thinkers: &[Thinker], query: &str) -> Vec<Thinker> {
    let query = query.trim().to_lowercase();
    thinkers
        .iter()
        .filter(|thinker| {
            thinker.name.to_lowercase().contains(&query)
                || thinker.description.to_lowercase().contains(&query)
                || thinker.category.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Apply the optional category filter, then the query with the chosen
/// algorithm. A request with neither is rejected.
pub fn search_corpus(
    thinkers: &[Thinker],
    request: &SearchRequest,
    mode: SearchMode,
) -> Result<SearchResults> {
    let query = request.normalized_query();
    let category = request.normalized_category();
    if query.is_none() && category.is_none() {
        return Err(CatalogueError::InvalidRequest(
            "Please provide a search query (q) or category filter".to_string(),
        ));
    }

    let scoped = match category.as_deref() {
        Some(filter) => filter_by_category(thinkers, filter),
        None => thinkers.to_vec(),
    };
    let results = match (query.as_deref(), mode) {
        (None, _) => scoped,
        (Some(query), SearchMode::Scored) => scored_search(&scoped, query)
            .into_iter()
            .map(|hit| hit.thinker)
            .collect(),
        (Some(query), SearchMode::Substring) => text_search(&scoped, query),
    };

    Ok(SearchResults {
        query: query.unwrap_or_default(),
        category,
        count: results.len(),
        results,
    })
}

/// Uniform pick from `thinkers`, optionally narrowed by a category filter.
pub fn pick_random<R: Rng + ?Sized>(
    thinkers: &[Thinker],
    category: Option<&str>,
    rng: &mut R,
) -> Result<Thinker> {
    let filter = category
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty());
    let candidates = thinkers
        .iter()
        .filter(|thinker| {
            filter
                .as_deref()
                .is_none_or(|filter| thinker.category.to_lowercase().contains(filter))
        })
        .collect::<Vec<_>>();
    candidates.choose(rng).map(|thinker| (*thinker).clone()).ok_or_else(|| {
        CatalogueError::NotFound("No thinkers found matching criteria".to_string())
    })
}
