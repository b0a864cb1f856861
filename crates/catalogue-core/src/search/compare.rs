use std::collections::HashSet;

use crate::error::{CatalogueError, Result};
use crate::models::{ComparisonEntry, ComparisonReport, Thinker};

pub const MIN_COMPARE_NAMES: usize = 2;

/// Split a comma-separated name list, trimming names and dropping blanks.
#[must_use]
pub fn parse_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Side-by-side view of the named thinkers. Names match case-insensitively
/// against the whole corpus; unresolved names are reported, not fatal, unless
/// none resolve.
pub fn compare_thinkers(corpus: &[Thinker], names: &[String]) -> Result<ComparisonReport> {
    if names.len() < MIN_COMPARE_NAMES {
        return Err(CatalogueError::InvalidRequest(format!(
            "Please provide at least {MIN_COMPARE_NAMES} thinkers to compare"
        )));
    }

    let mut comparison = Vec::with_capacity(names.len());
    let mut not_found = Vec::new();
    for name in names {
        let wanted = name.to_lowercase();
        match corpus
            .iter()
            .find(|thinker| thinker.name.to_lowercase() == wanted)
        {
            Some(thinker) => comparison.push(comparison_entry(thinker)),
            None => not_found.push(name.clone()),
        }
    }

    if comparison.is_empty() {
        return Err(CatalogueError::NotFound(format!(
            "No thinkers found: {}",
            not_found.join(", ")
        )));
    }

    let shared_subjects = shared_subjects(
        &comparison
            .iter()
            .map(|entry| entry.subject_list.clone())
            .collect::<Vec<_>>(),
    );
    Ok(ComparisonReport {
        comparison,
        shared_subjects,
        not_found: (!not_found.is_empty()).then_some(not_found),
    })
}

/// Subjects present in every list, in the order of the first list.
#[must_use]
pub fn shared_subjects(lists: &[Vec<String>]) -> Vec<String> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };
    let others = rest
        .iter()
        .map(|list| list.iter().collect::<HashSet<_>>())
        .collect::<Vec<_>>();
    let mut seen = HashSet::new();
    first
        .iter()
        .filter(|subject| others.iter().all(|set| set.contains(subject)))
        .filter(|subject| seen.insert(subject.as_str()))
        .cloned()
        .collect()
}

fn comparison_entry(thinker: &Thinker) -> ComparisonEntry {
    let subject_list = thinker.subject_names();
    ComparisonEntry {
        name: thinker.name.clone(),
        category: thinker.category.clone(),
        description: thinker.description.clone(),
        works: thinker.work_count,
        subjects: subject_list.len(),
        subject_list,
        major_works: thinker.major_works.as_ref().map_or(0, Vec::len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tests::thinker_with_subjects;

    fn corpus() -> Vec<Thinker> {
        vec![
            thinker_with_subjects("Karl Marx", &["Economics", "Philosophy", "Letters"]),
            thinker_with_subjects("Vladimir Lenin", &["Philosophy", "Political Theory", "Letters"]),
            thinker_with_subjects("Friedrich Engels", &["Letters", "Philosophy"]),
        ]
    }

    #[test]
    fn parse_name_list_trims_and_drops_blanks() {
        assert_eq!(
            parse_name_list(" Karl Marx , ,Vladimir Lenin,"),
            vec!["Karl Marx", "Vladimir Lenin"]
        );
    }

    #[test]
    fn compare_reports_shared_subjects_in_first_thinker_order() {
        let names = vec![
            "karl marx".to_string(),
            "VLADIMIR LENIN".to_string(),
            "Friedrich Engels".to_string(),
        ];
        let report = compare_thinkers(&corpus(), &names).expect("compare");
        assert_eq!(report.comparison.len(), 3);
        assert_eq!(report.comparison[0].name, "Karl Marx");
        assert_eq!(report.comparison[0].subjects, 3);
        assert_eq!(report.shared_subjects, vec!["Philosophy", "Letters"]);
        assert_eq!(report.not_found, None);
    }

    #[test]
    fn compare_collects_unresolved_names() {
        let names = vec!["Karl Marx".to_string(), "NonExistent".to_string()];
        let report = compare_thinkers(&corpus(), &names).expect("compare");
        assert_eq!(report.comparison.len(), 1);
        assert_eq!(report.not_found, Some(vec!["NonExistent".to_string()]));
        assert_eq!(
            report.shared_subjects,
            vec!["Economics", "Philosophy", "Letters"]
        );
    }

    #[test]
    fn compare_fails_when_nothing_resolves() {
        let names = vec!["NonExistent1".to_string(), "NonExistent2".to_string()];
        let err = compare_thinkers(&corpus(), &names).expect_err("must fail");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn compare_requires_two_names() {
        let err = compare_thinkers(&corpus(), &["Karl Marx".to_string()]).expect_err("must fail");
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[test]
    fn shared_subjects_of_nothing_is_empty() {
        assert!(shared_subjects(&[]).is_empty());
    }
}
