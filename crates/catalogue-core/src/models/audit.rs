use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexCountDrift {
    pub category: String,
    pub declared: u64,
    pub observed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCountDrift {
    pub category: String,
    pub thinker: String,
    pub declared: u64,
    pub subject_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCountDrift {
    pub category: String,
    pub thinker: String,
    pub subject: String,
    pub declared: u64,
    pub observed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub categories_checked: usize,
    pub thinkers_checked: usize,
    pub subject_files_checked: usize,
    pub unreadable_documents: Vec<String>,
    pub index_count_drift: Vec<IndexCountDrift>,
    pub work_count_drift: Vec<WorkCountDrift>,
    pub subject_count_drift: Vec<SubjectCountDrift>,
    pub missing_subject_files: Vec<String>,
    pub orphan_subject_files: Vec<String>,
}

impl AuditReport {
    #[must_use]
    pub fn drift_count(&self) -> usize {
        self.unreadable_documents.len()
            + self.index_count_drift.len()
            + self.work_count_drift.len()
            + self.subject_count_drift.len()
            + self.missing_subject_files.len()
            + self.orphan_subject_files.len()
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.drift_count() == 0
    }
}
