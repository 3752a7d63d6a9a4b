use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One daily-progress-report entry. Entries are immutable once appended:
/// there is no update or delete anywhere in the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DprEntry {
    pub id: String,
    pub created_at: DateTime<Local>,
    pub work_description: String,
    pub remarks: String,
    pub photo_ref: Option<String>,
}

impl DprEntry {
    /// Build a fresh entry with a new unique id and the current instant.
    pub fn new(
        created_at: DateTime<Local>,
        work_description: &str,
        remarks: &str,
        photo_ref: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at,
            work_description: work_description.to_string(),
            remarks: remarks.to_string(),
            photo_ref,
        }
    }

    pub fn created_str(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
