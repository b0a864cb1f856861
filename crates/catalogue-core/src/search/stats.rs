use std::collections::HashMap;

use chrono::Utc;

use crate::models::{CatalogueStats, CategoryStat, ProlificThinker, Thinker};

pub const TOP_LIMIT: usize = 10;

/// Aggregate figures over a metadata-only corpus. `total_categories` comes
/// from the index and may differ from the categories seen in the corpus.
#[must_use]
pub fn compute_statistics(thinkers: &[Thinker], total_categories: usize) -> CatalogueStats {
    let total_works = thinkers.iter().map(|thinker| thinker.work_count).sum::<u64>();

    CatalogueStats {
        total_thinkers: thinkers.len(),
        total_works,
        total_categories,
        average_works_per_thinker: rounded_average(total_works, thinkers.len()),
        top_categories: top_categories(thinkers),
        most_prolific_thinkers: most_prolific(thinkers),
        last_updated: Utc::now().to_rfc3339(),
    }
}

// Half-up rounding of total / count.
fn rounded_average(total: u64, count: usize) -> u64 {
    let count = count as u64;
    if count == 0 {
        return 0;
    }
    (2 * total + count) / (2 * count)
}

fn top_categories(thinkers: &[Thinker]) -> Vec<CategoryStat> {
    let mut positions = HashMap::<&str, usize>::new();
    let mut stats = Vec::<CategoryStat>::new();
    for thinker in thinkers {
        let slot = *positions.entry(thinker.category.as_str()).or_insert_with(|| {
            stats.push(CategoryStat {
                name: thinker.category.clone(),
                thinkers: 0,
                works: 0,
            });
            stats.len() - 1
        });
        stats[slot].thinkers += 1;
        stats[slot].works += thinker.work_count;
    }
    stats.sort_by(|a, b| b.works.cmp(&a.works));
    stats.truncate(TOP_LIMIT);
    stats
}

fn most_prolific(thinkers: &[Thinker]) -> Vec<ProlificThinker> {
    let mut prolific = thinkers
        .iter()
        .filter(|thinker| thinker.work_count > 0)
        .collect::<Vec<_>>();
    prolific.sort_by(|a, b| b.work_count.cmp(&a.work_count));
    prolific
        .into_iter()
        .take(TOP_LIMIT)
        .map(|thinker| ProlificThinker {
            name: thinker.name.clone(),
            category: thinker.category.clone(),
            works: thinker.work_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tests::thinker;

    fn with_works(name: &str, category: &str, works: u64) -> Thinker {
        let mut thinker = thinker(name, category, "");
        thinker.work_count = works;
        thinker
    }

    #[test]
    fn statistics_aggregate_by_category_display_name() {
        let corpus = vec![
            with_works("Karl Marx", "First International", 120),
            with_works("Mikhail Bakunin", "Anarchists", 40),
            with_works("Friedrich Engels", "First International", 90),
            with_works("Unknown Pamphleteer", "Anarchists", 0),
        ];
        let stats = compute_statistics(&corpus, 7);

        assert_eq!(stats.total_thinkers, 4);
        assert_eq!(stats.total_works, 250);
        assert_eq!(stats.total_categories, 7);
        assert_eq!(stats.average_works_per_thinker, 63);
        assert_eq!(
            stats.top_categories,
            vec![
                CategoryStat {
                    name: "First International".to_string(),
                    thinkers: 2,
                    works: 210,
                },
                CategoryStat {
                    name: "Anarchists".to_string(),
                    thinkers: 2,
                    works: 40,
                },
            ]
        );
        let prolific = stats
            .most_prolific_thinkers
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(prolific, vec!["Karl Marx", "Friedrich Engels", "Mikhail Bakunin"]);
        assert!(chrono::DateTime::parse_from_rfc3339(&stats.last_updated).is_ok());
    }

    #[test]
    fn single_thinker_corpus_averages_to_its_own_count() {
        let stats = compute_statistics(&[with_works("Rosa Luxemburg", "Spartacists", 42)], 1);
        assert_eq!(stats.total_works, 42);
        assert_eq!(stats.average_works_per_thinker, 42);
        assert_eq!(stats.most_prolific_thinkers.len(), 1);
    }

    #[test]
    fn empty_corpus_has_zero_average() {
        let stats = compute_statistics(&[], 3);
        assert_eq!(stats.total_thinkers, 0);
        assert_eq!(stats.average_works_per_thinker, 0);
        assert!(stats.top_categories.is_empty());
        assert!(stats.most_prolific_thinkers.is_empty());
    }

    #[test]
    fn rankings_are_capped_and_ties_keep_corpus_order() {
        let corpus = (0..15)
            .map(|i| with_works(&format!("T{i}"), &format!("C{i}"), 5))
            .collect::<Vec<_>>();
        let stats = compute_statistics(&corpus, 15);
        assert_eq!(stats.top_categories.len(), TOP_LIMIT);
        assert_eq!(stats.top_categories[0].name, "C0");
        assert_eq!(stats.top_categories[9].name, "C9");
        assert_eq!(stats.most_prolific_thinkers.len(), TOP_LIMIT);
        assert_eq!(stats.most_prolific_thinkers[0].name, "T0");
    }

    #[test]
    fn average_rounds_half_up() {
        assert_eq!(rounded_average(5, 2), 3);
        assert_eq!(rounded_average(4, 3), 1);
        assert_eq!(rounded_average(0, 4), 0);
    }
}
