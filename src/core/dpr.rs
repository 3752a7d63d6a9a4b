//! Append-only daily-progress-report log.

use crate::errors::{AppError, AppResult};
use crate::models::dpr::DprEntry;
use crate::store::LocalRecordStore;
use chrono::Local;

/// Store list holding every DPR entry ever appended.
pub const DPR_LIST: &str = "dpr.entries";

pub struct DprLog {
    store: LocalRecordStore,
}

impl DprLog {
    pub fn new(store: LocalRecordStore) -> Self {
        Self { store }
    }

    /// Append a new entry and return it as stored.
    ///
    /// The work description is validated at the UI layer already; it is
    /// re-checked here because an empty description must never reach the
    /// store regardless of caller.
    pub fn append(
        &mut self,
        work_description: &str,
        remarks: &str,
        photo_ref: Option<String>,
    ) -> AppResult<DprEntry> {
        if work_description.trim().is_empty() {
            return Err(AppError::EmptyDescription);
        }

        let entry = DprEntry::new(Local::now(), work_description, remarks, photo_ref);
        self.store.append_to_list(DPR_LIST, &entry)?;

        Ok(entry)
    }

    /// Full history in append order. Pagination and filtering are UI
    /// concerns; the log itself always hands back everything.
    pub fn list_all(&self) -> AppResult<Vec<DprEntry>> {
        self.store.read_list(DPR_LIST)
    }

    pub fn store_mut(&mut self) -> &mut LocalRecordStore {
        &mut self.store
    }
}
