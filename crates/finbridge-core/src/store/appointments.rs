use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDateTime, Utc};

use crate::error::FinbridgeError;
use crate::model::{ApplicationRecord, AppointmentRecord, AppointmentStatus};
use crate::store::{next_id, now_stamp, read_table, write_table};

const COLUMNS: [&str; 7] = [
    "appointment_id",
    "app_id",
    "user_email",
    "bank_id",
    "scheduled_time",
    "created_at",
    "status",
];

const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only ledger of bank appointments. Single-writer (see module docs).
///
/// Scheduling takes a looked-up [`ApplicationRecord`] so an appointment can
/// never point at a missing application.
pub struct AppointmentStore {
    path: PathBuf,
}

impl AppointmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AppointmentStore { path: path.into() }
    }

    /// `appointments.csv` under the given data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("appointments.csv"))
    }

    /// Schedule an appointment at the requested time.
    ///
    /// `when` may be ISO-8601 or `YYYY-MM-DD HH:MM`; both normalize to
    /// `YYYY-MM-DD HH:MM:SS`. Anything else is stored verbatim (kept for
    /// compatibility with existing rows, logged as a warning).
    pub fn schedule(
        &self,
        application: &ApplicationRecord,
        when: &str,
    ) -> Result<AppointmentRecord, FinbridgeError> {
        let scheduled_time = match normalize_when(when) {
            Some(normalized) => normalized,
            None => {
                tracing::warn!(app_id = application.app_id, when, "unparseable appointment time stored verbatim");
                when.to_string()
            }
        };
        self.append(application, scheduled_time)
    }

    /// Schedule an appointment a number of days from now.
    pub fn schedule_in_days(
        &self,
        application: &ApplicationRecord,
        days: i64,
    ) -> Result<AppointmentRecord, FinbridgeError> {
        let scheduled = (Utc::now().naive_utc() + Duration::days(days))
            .format(STORED_FORMAT)
            .to_string();
        self.append(application, scheduled)
    }

    fn append(
        &self,
        application: &ApplicationRecord,
        scheduled_time: String,
    ) -> Result<AppointmentRecord, FinbridgeError> {
        let mut rows: Vec<AppointmentRecord> = read_table(&self.path)?;
        let appointment_id = next_id(&rows, |r: &AppointmentRecord| r.appointment_id);

        let record = AppointmentRecord {
            appointment_id,
            app_id: application.app_id,
            user_email: application.user_email.clone(),
            bank_id: application.bank_id,
            scheduled_time,
            created_at: now_stamp(),
            status: AppointmentStatus::Scheduled,
        };

        rows.push(record.clone());
        write_table(&self.path, &COLUMNS, &rows)?;
        tracing::info!(
            appointment_id,
            app_id = record.app_id,
            scheduled = %record.scheduled_time,
            "appointment recorded"
        );
        Ok(record)
    }

    pub fn load(&self) -> Result<Vec<AppointmentRecord>, FinbridgeError> {
        read_table(&self.path)
    }

    /// All appointments for one user, in creation order.
    pub fn list_for(&self, user_email: &str) -> Result<Vec<AppointmentRecord>, FinbridgeError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.user_email == user_email)
            .collect())
    }
}

/// Normalize an appointment time string to `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts ISO-8601 (`T` separator, seconds optional) and the space form
/// with or without seconds. Returns `None` when no format matches.
pub fn normalize_when(when: &str) -> Option<String> {
    const ACCEPTED: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    let when = when.trim();
    ACCEPTED.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(when, format)
            .ok()
            .map(|dt| dt.format(STORED_FORMAT).to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ApplicationStatus;

    fn application(app_id: u64) -> ApplicationRecord {
        ApplicationRecord {
            app_id,
            user_email: "siya@example.com".into(),
            bank_id: 1,
            status: ApplicationStatus::Pending,
            filled_form_fields_json: "{}".into(),
            timestamp: "2026-01-01 09:00:00".into(),
        }
    }

    fn store() -> (tempfile::TempDir, AppointmentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = AppointmentStore::in_dir(dir.path());
        (dir, store)
    }

    #[test]
    fn test_normalize_iso_form() {
        assert_eq!(
            normalize_when("2025-12-01T10:30:00").as_deref(),
            Some("2025-12-01 10:30:00")
        );
    }

    #[test]
    fn test_normalize_minute_form() {
        assert_eq!(
            normalize_when("2025-12-01 10:30").as_deref(),
            Some("2025-12-01 10:30:00")
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert_eq!(normalize_when("not-a-date"), None);
    }

    #[test]
    fn test_schedule_normalizes_time() {
        let (_dir, store) = store();
        let appt = store.schedule(&application(1), "2025-12-01T10:30:00").unwrap();
        assert_eq!(appt.scheduled_time, "2025-12-01 10:30:00");
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_schedule_stores_garbage_verbatim() {
        let (_dir, store) = store();
        let appt = store.schedule(&application(1), "not-a-date").unwrap();
        assert_eq!(appt.scheduled_time, "not-a-date");
    }

    #[test]
    fn test_ids_and_application_linkage() {
        let (_dir, store) = store();
        let first = store.schedule(&application(5), "2025-12-01 10:30").unwrap();
        let second = store.schedule(&application(6), "2025-12-02 11:00").unwrap();
        assert_eq!(first.appointment_id, 1);
        assert_eq!(second.appointment_id, 2);
        assert_eq!(second.app_id, 6);
        assert_eq!(second.bank_id, 1);
    }

    #[test]
    fn test_schedule_in_days_lands_in_future() {
        let (_dir, store) = store();
        let appt = store.schedule_in_days(&application(1), 3).unwrap();
        let scheduled =
            NaiveDateTime::parse_from_str(&appt.scheduled_time, STORED_FORMAT).unwrap();
        assert!(scheduled > Utc::now().naive_utc() + Duration::days(2));
    }
}
