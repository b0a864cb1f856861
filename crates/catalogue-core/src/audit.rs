//! Offline consistency check of a record store.
//!
//! Index counts, per-thinker work counts and per-subject counts are generated
//! independently of the documents they describe, so they can drift. The audit
//! reads every document once and reports the differences; it never writes.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::documents::{parse_index_document, parse_metadata_document, parse_subject_document};
use crate::error::{CatalogueError, Result};
use crate::models::{
    AuditReport, Category, IndexCountDrift, SubjectCountDrift, ThinkerMetadata, WorkCountDrift,
};
use crate::paths::{METADATA_FILE, category_metadata_path, index_path, subject_works_path};

/// Audit the record store under `root`. Fails only when the index itself cannot
/// be read; every other problem is reported.
pub fn audit_data_root(root: &Path) -> Result<AuditReport> {
    let index_file = index_path(root);
    let raw = fs::read_to_string(&index_file).map_err(|err| {
        CatalogueError::DataUnavailable(format!("{}: {err}", index_file.display()))
    })?;
    let index = parse_index_document(&raw)?;

    let mut report = AuditReport::default();
    for category in &index.categories {
        audit_category(root, category, &mut report);
    }
    report.categories_checked = index.categories.len();

    tracing::info!(
        categories = report.categories_checked,
        thinkers = report.thinkers_checked,
        subject_files = report.subject_files_checked,
        drift = report.drift_count(),
        "record store audit finished"
    );
    Ok(report)
}

fn audit_category(root: &Path, category: &Category, report: &mut AuditReport) {
    let records = match category_metadata_path(root, &category.path)
        .and_then(|path| read_metadata(&path))
    {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(category_path = %category.path, error = %err, "unreadable category metadata");
            report
                .unreadable_documents
                .push(format!("{}/{METADATA_FILE}", category.path));
            return;
        }
    };

    let observed = records.len() as u64;
    if observed != category.count {
        report.index_count_drift.push(IndexCountDrift {
            category: category.path.clone(),
            declared: category.count,
            observed,
        });
    }

    let mut listed = HashSet::new();
    for record in &records {
        report.thinkers_checked += 1;
        audit_thinker(root, category, record, &mut listed, report);
    }
    report
        .orphan_subject_files
        .extend(orphan_subject_files(root, &category.path, &listed));
}

fn audit_thinker(
    root: &Path,
    category: &Category,
    record: &ThinkerMetadata,
    listed: &mut HashSet<PathBuf>,
    report: &mut AuditReport,
) {
    let subject_total = record.subject_work_total();
    if record.subjects.is_some() && subject_total != record.work_count {
        report.work_count_drift.push(WorkCountDrift {
            category: category.path.clone(),
            thinker: record.name.clone(),
            declared: record.work_count,
            subject_total,
        });
    }

    for subject in record.subjects.as_deref().unwrap_or_default() {
        let display = format!("{}/{}/{}", category.path, record.name, subject.name);
        let path = match subject_works_path(root, &category.path, &record.name, &subject.name) {
            Ok(path) => path,
            Err(_) => {
                report.unreadable_documents.push(display);
                continue;
            }
        };
        listed.insert(path.clone());

        if !path.is_file() {
            // Generators skip files for empty subjects.
            if subject.count > 0 {
                report.missing_subject_files.push(display);
            }
            continue;
        }
        report.subject_files_checked += 1;

        let works = fs::read_to_string(&path)
            .map_err(CatalogueError::from)
            .and_then(|raw| parse_subject_document(&raw, &subject.name));
        match works {
            Ok(works) if works.len() as u64 != subject.count => {
                report.subject_count_drift.push(SubjectCountDrift {
                    category: category.path.clone(),
                    thinker: record.name.clone(),
                    subject: subject.name.clone(),
                    declared: subject.count,
                    observed: works.len() as u64,
                });
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unreadable subject file");
                report.unreadable_documents.push(display);
            }
        }
    }
}

fn read_metadata(path: &Path) -> Result<Vec<ThinkerMetadata>> {
    let raw = fs::read_to_string(path)?;
    parse_metadata_document(&raw)
}

fn orphan_subject_files(root: &Path, category_path: &str, listed: &HashSet<PathBuf>) -> Vec<String> {
    let Ok(folder) = category_metadata_path(root, category_path) else {
        return Vec::new();
    };
    let Some(folder) = folder.parent() else {
        return Vec::new();
    };

    let mut orphans = WalkDir::new(folder)
        .follow_links(false)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .filter(|entry| !listed.contains(entry.path()))
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|rel| rel.to_string_lossy().replace('\\', "/"))
        })
        .collect::<Vec<_>>();
    orphans.sort();
    orphans
}
