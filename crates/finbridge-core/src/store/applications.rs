use std::path::{Path, PathBuf};

use crate::error::FinbridgeError;
use crate::model::{ApplicationRecord, ApplicationStatus};
use crate::store::{next_id, now_stamp, read_table, write_table};

const COLUMNS: [&str; 6] = [
    "app_id",
    "user_email",
    "bank_id",
    "status",
    "filled_form_fields_json",
    "timestamp",
];

/// Append-only ledger of loan applications. Single-writer (see module docs).
pub struct ApplicationStore {
    path: PathBuf,
}

impl ApplicationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ApplicationStore { path: path.into() }
    }

    /// `applications.csv` under the given data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("applications.csv"))
    }

    /// Append a new application with status `Pending`.
    ///
    /// `filled_fields` is the form mapping as submitted; it is stored as one
    /// JSON string column.
    pub fn append(
        &self,
        user_email: &str,
        bank_id: u64,
        filled_fields: &serde_json::Value,
    ) -> Result<ApplicationRecord, FinbridgeError> {
        let mut rows: Vec<ApplicationRecord> = read_table(&self.path)?;
        let app_id = next_id(&rows, |r: &ApplicationRecord| r.app_id);

        let record = ApplicationRecord {
            app_id,
            user_email: user_email.to_string(),
            bank_id,
            status: ApplicationStatus::Pending,
            filled_form_fields_json: serde_json::to_string(filled_fields)?,
            timestamp: now_stamp(),
        };

        rows.push(record.clone());
        write_table(&self.path, &COLUMNS, &rows)?;
        tracing::info!(app_id, bank_id, user_email, "application recorded");
        Ok(record)
    }

    pub fn load(&self) -> Result<Vec<ApplicationRecord>, FinbridgeError> {
        read_table(&self.path)
    }

    /// All applications for one user, in submission order.
    pub fn list_for(&self, user_email: &str) -> Result<Vec<ApplicationRecord>, FinbridgeError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.user_email == user_email)
            .collect())
    }

    pub fn get(&self, app_id: u64) -> Result<Option<ApplicationRecord>, FinbridgeError> {
        Ok(self.load()?.into_iter().find(|r| r.app_id == app_id))
    }

    /// Change an application's status. This is the external mutation point;
    /// the pipeline itself only ever creates `Pending` rows.
    pub fn set_status(
        &self,
        app_id: u64,
        status: ApplicationStatus,
    ) -> Result<(), FinbridgeError> {
        let mut rows: Vec<ApplicationRecord> = read_table(&self.path)?;
        let row = rows
            .iter_mut()
            .find(|r| r.app_id == app_id)
            .ok_or(FinbridgeError::ApplicationNotFound { app_id })?;
        row.status = status;
        write_table(&self.path, &COLUMNS, &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, ApplicationStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ApplicationStore::in_dir(dir.path());
        (dir, store)
    }

    fn form() -> serde_json::Value {
        json!({"full_name": "Siya Sharma", "loan_amount": 450000, "tenure_years": 5})
    }

    #[test]
    fn test_three_appends_yield_sequential_ids() {
        let (_dir, store) = store();
        for expected in 1..=3 {
            let record = store.append("siya@example.com", 1, &form()).unwrap();
            assert_eq!(record.app_id, expected);
            assert_eq!(record.status, ApplicationStatus::Pending);
        }
    }

    #[test]
    fn test_form_fields_stored_as_json() {
        let (_dir, store) = store();
        let record = store.append("siya@example.com", 2, &form()).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&record.filled_form_fields_json).unwrap();
        assert_eq!(parsed["full_name"], "Siya Sharma");
        assert_eq!(parsed["loan_amount"], 450000);
    }

    #[test]
    fn test_list_for_filters_by_email() {
        let (_dir, store) = store();
        store.append("a@example.com", 1, &form()).unwrap();
        store.append("b@example.com", 1, &form()).unwrap();
        store.append("a@example.com", 2, &form()).unwrap();

        let apps = store.list_for("a@example.com").unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].app_id, 1);
        assert_eq!(apps[1].app_id, 3);
    }

    #[test]
    fn test_set_status_updates_row() {
        let (_dir, store) = store();
        let record = store.append("a@example.com", 1, &form()).unwrap();
        store
            .set_status(record.app_id, ApplicationStatus::Approved)
            .unwrap();
        let reloaded = store.get(record.app_id).unwrap().unwrap();
        assert_eq!(reloaded.status, ApplicationStatus::Approved);
    }

    #[test]
    fn test_set_status_unknown_id_fails() {
        let (_dir, store) = store();
        let err = store.set_status(42, ApplicationStatus::Approved).unwrap_err();
        assert!(matches!(
            err,
            FinbridgeError::ApplicationNotFound { app_id: 42 }
        ));
    }
}
