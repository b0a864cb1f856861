use std::path::{Path, PathBuf};

use crate::error::{CatalogueError, Result};

pub const INDEX_FILE: &str = "index.json";
pub const METADATA_FILE: &str = "metadata.json";
const SUBJECT_EXTENSION: &str = "json";

const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Map a thinker, subject or category name to a single file-name segment.
///
/// Mirrors the naming used when the record store is generated: filename-illegal
/// characters are dropped and whitespace runs collapse to one space.
pub fn sanitize_segment(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        if FORBIDDEN_FILENAME_CHARS.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    if out.is_empty() || out == "." || out == ".." {
        return Err(CatalogueError::InvalidRequest(format!(
            "name does not map to a storage segment: {raw:?}"
        )));
    }
    Ok(out)
}

/// Folder slug for a category display name, e.g. `First International` to
/// `first-international`.
#[must_use]
pub fn category_folder(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() || lower.is_ascii_digit() || lower == '-' {
            out.push(lower);
        }
    }
    out
}

pub(crate) fn index_path(root: &Path) -> PathBuf {
    root.join(INDEX_FILE)
}

pub(crate) fn category_metadata_path(root: &Path, category_path: &str) -> Result<PathBuf> {
    Ok(root
        .join(sanitize_segment(category_path)?)
        .join(METADATA_FILE))
}

pub(crate) fn subject_works_path(
    root: &Path,
    category_path: &str,
    thinker: &str,
    subject: &str,
) -> Result<PathBuf> {
    let file_name = format!("{}.{SUBJECT_EXTENSION}", sanitize_segment(subject)?);
    Ok(root
        .join(sanitize_segment(category_path)?)
        .join(sanitize_segment(thinker)?)
        .join(file_name))
}
