use crate::models::{ScoredThinker, Thinker};

pub const EXACT_NAME_SCORE: u32 = 1000;
pub const NAME_PREFIX_SCORE: u32 = 800;
pub const NAME_CONTAINS_SCORE: u32 = 600;
pub const CATEGORY_CONTAINS_SCORE: u32 = 400;
pub const DESCRIPTION_CONTAINS_SCORE: u32 = 200;

/// Rank of one thinker for a lowercased query; the highest matching rule wins.
#[must_use]
pub fn score_thinker(thinker: &Thinker, query: &str) -> Option<u32> {
    if query.is_empty() {
        return None;
    }
    let name = thinker.name.to_lowercase();
    if name == query {
        return Some(EXACT_NAME_SCORE);
    }
    if name.starts_with(query) {
        return Some(NAME_PREFIX_SCORE);
    }
    if name.contains(query) {
        return Some(NAME_CONTAINS_SCORE);
    }
    if thinker.category.to_lowercase().contains(query) {
        return Some(CATEGORY_CONTAINS_SCORE);
    }
    if thinker.description.to_lowercase().contains(query) {
        return Some(DESCRIPTION_CONTAINS_SCORE);
    }
    None
}

/// Matching thinkers, highest score first. Equal scores keep corpus order.
#[must_use]
pub fn scored_search(thinkers: &[Thinker], query: &str) -> Vec<ScoredThinker> {
    let query = query.trim().to_lowercase();
    let mut hits = thinkers
        .iter()
        .filter_map(|thinker| {
            score_thinker(thinker, &query).map(|score| ScoredThinker {
                thinker: thinker.clone(),
                score,
            })
        })
        .collect::<Vec<_>>();
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}
