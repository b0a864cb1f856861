//! Compact on-disk thinker records and their expansion to the API shape.
//!
//! Category metadata documents store thinkers with single-letter keys to keep
//! the files small. The mapping is fixed:
//!
//! | key | field |
//! |---|---|
//! | `n` | name |
//! | `c` | category display name |
//! | `d` | description |
//! | `b` | biography URL |
//! | `i` | image URL |
//! | `t` | thumbnail URL (optional) |
//! | `w` | work count (optional, missing = 0) |
//! | `j` | curated major works (optional) |
//! | `subjects` | subject files and their sizes (optional) |

use serde::{Deserialize, Deserializer, Serialize};

use super::Work;

/// Metadata document format version understood by this crate.
pub const METADATA_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkerMetadata {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "c", default, deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(rename = "d", default, deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(rename = "b", default, deserialize_with = "string_or_null")]
    pub bio_url: String,
    #[serde(rename = "i", default, deserialize_with = "string_or_null")]
    pub image_url: String,
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "w", default, deserialize_with = "count_or_null")]
    pub work_count: u64,
    #[serde(rename = "j", default, skip_serializing_if = "Option::is_none")]
    pub major_works: Option<Vec<Work>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<SubjectEntry>>,
}

impl ThinkerMetadata {
    #[must_use]
    pub fn subject_names(&self) -> Vec<String> {
        self.subjects
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|subject| subject.name.clone())
            .collect()
    }

    /// Sum of the per-subject counts. Independent of `work_count`, which is
    /// generated separately and may drift.
    #[must_use]
    pub fn subject_work_total(&self) -> u64 {
        self.subjects
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|subject| subject.count)
            .sum()
    }

    /// Expand to the API representation with `works` left unloaded.
    #[must_use]
    pub fn expand(&self) -> Thinker {
        Thinker {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            bio_url: self.bio_url.clone(),
            image_url: self.image_url.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            work_count: self.work_count,
            major_works: self.major_works.clone(),
            subjects: self.subjects.clone(),
            works: Vec::new(),
        }
    }
}

/// API-facing thinker. An empty `works` list means "not loaded", not "has no
/// works".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thinker {
    pub name: String,
    pub category: String,
    pub description: String,
    pub bio_url: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub work_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_works: Option<Vec<Work>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<SubjectEntry>>,
    #[serde(default)]
    pub works: Vec<Work>,
}

impl Thinker {
    #[must_use]
    pub fn subject_names(&self) -> Vec<String> {
        self.subjects
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|subject| subject.name.clone())
            .collect()
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn count_or_null<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}
