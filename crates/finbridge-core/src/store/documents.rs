use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FinbridgeError;
use crate::model::{DocumentExtraction, DocumentRecord, ExtractedFields};
use crate::store::{next_id, now_iso, read_table, write_table};

const COLUMNS: [&str; 11] = [
    "doc_id",
    "email",
    "upload_time",
    "source_files",
    "extracted_name",
    "extracted_course",
    "extracted_gpa",
    "extracted_income",
    "extracted_admission_year",
    "raw_text",
    "parsed_json",
];

/// Persisted row layout. The headline fields get their own columns; the
/// complete extraction (dob, college, usn, loan amount included) rides in
/// `parsed_json`.
#[derive(Debug, Serialize, Deserialize)]
struct DocumentRow {
    doc_id: u64,
    email: String,
    upload_time: String,
    /// JSON array of source paths.
    source_files: String,
    extracted_name: Option<String>,
    extracted_course: Option<String>,
    extracted_gpa: Option<Decimal>,
    extracted_income: Option<Decimal>,
    extracted_admission_year: Option<i32>,
    raw_text: String,
    parsed_json: String,
}

/// Append-only ledger of processed uploads. Single-writer (see module docs).
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DocumentStore { path: path.into() }
    }

    /// `documents.csv` under the given data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("documents.csv"))
    }

    /// Record one processed upload batch and return the stored record.
    pub fn record(
        &self,
        email: &str,
        source_files: &[String],
        extraction: &DocumentExtraction,
    ) -> Result<DocumentRecord, FinbridgeError> {
        let mut rows: Vec<DocumentRow> = read_table(&self.path)?;
        let doc_id = next_id(&rows, |r: &DocumentRow| r.doc_id);

        let record = DocumentRecord {
            doc_id,
            email: email.trim().to_string(),
            upload_time: now_iso(),
            source_files: source_files.to_vec(),
            fields: extraction.fields.clone(),
            raw_text: extraction.raw_text.clone(),
            parsed_json: serde_json::to_string(extraction)?,
        };

        rows.push(to_row(&record)?);
        write_table(&self.path, &COLUMNS, &rows)?;
        tracing::info!(doc_id, email = %record.email, "document recorded");
        Ok(record)
    }

    /// All records in insertion order.
    pub fn load(&self) -> Result<Vec<DocumentRecord>, FinbridgeError> {
        let rows: Vec<DocumentRow> = read_table(&self.path)?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    /// Most recent record for an email, if any.
    pub fn latest_for(&self, email: &str) -> Result<Option<DocumentRecord>, FinbridgeError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.email == email)
            .next_back())
    }
}

fn to_row(record: &DocumentRecord) -> Result<DocumentRow, FinbridgeError> {
    Ok(DocumentRow {
        doc_id: record.doc_id,
        email: record.email.clone(),
        upload_time: record.upload_time.clone(),
        source_files: serde_json::to_string(&record.source_files)?,
        extracted_name: record.fields.name.clone(),
        extracted_course: record.fields.course.clone(),
        extracted_gpa: record.fields.gpa,
        extracted_income: record.fields.income,
        extracted_admission_year: record.fields.admission_year,
        raw_text: record.raw_text.clone(),
        parsed_json: record.parsed_json.clone(),
    })
}

fn from_row(row: DocumentRow) -> DocumentRecord {
    // parsed_json is authoritative for the full field set; fall back to the
    // headline columns if it no longer parses.
    let fields = match serde_json::from_str::<DocumentExtraction>(&row.parsed_json) {
        Ok(extraction) => extraction.fields,
        Err(e) => {
            tracing::warn!(doc_id = row.doc_id, error = %e, "unparseable parsed_json, using columns");
            ExtractedFields {
                name: row.extracted_name.clone(),
                course: row.extracted_course.clone(),
                gpa: row.extracted_gpa,
                income: row.extracted_income,
                admission_year: row.extracted_admission_year,
                ..ExtractedFields::default()
            }
        }
    };

    let source_files = serde_json::from_str(&row.source_files).unwrap_or_default();

    DocumentRecord {
        doc_id: row.doc_id,
        email: row.email,
        upload_time: row.upload_time,
        source_files,
        fields,
        raw_text: row.raw_text,
        parsed_json: row.parsed_json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_document;
    use rust_decimal_macros::dec;

    fn extraction() -> DocumentExtraction {
        extract_document("Name: Siya Sharma\nCGPA: 9.2\nFamily Income: 5,00,000\nUSN: CS21A001")
    }

    fn store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::in_dir(dir.path());
        (dir, store)
    }

    #[test]
    fn test_first_record_gets_id_one() {
        let (_dir, store) = store();
        let record = store
            .record("siya@example.com", &["grade-card.png".into()], &extraction())
            .unwrap();
        assert_eq!(record.doc_id, 1);
        assert_eq!(record.fields.gpa, Some(dec!(9.2)));
    }

    #[test]
    fn test_ids_increase_monotonically() {
        let (_dir, store) = store();
        for expected in 1..=3 {
            let record = store
                .record("siya@example.com", &["a.pdf".into()], &extraction())
                .unwrap();
            assert_eq!(record.doc_id, expected);
        }
    }

    #[test]
    fn test_round_trip_preserves_full_field_set() {
        let (_dir, store) = store();
        store
            .record(
                "siya@example.com",
                &["a.pdf".into(), "b.png".into()],
                &extraction(),
            )
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].source_files, vec!["a.pdf", "b.png"]);
        // usn has no dedicated column; it must survive through parsed_json.
        assert_eq!(loaded[0].fields.usn.as_deref(), Some("CS21A001"));
    }

    #[test]
    fn test_email_trimmed() {
        let (_dir, store) = store();
        let record = store
            .record("  siya@example.com ", &[], &extraction())
            .unwrap();
        assert_eq!(record.email, "siya@example.com");
    }

    #[test]
    fn test_header_only_file_self_heals() {
        let (_dir, store) = store();
        std::fs::write(
            store.path.clone(),
            b"doc_id,email,upload_time,source_files,extracted_name,extracted_course,extracted_gpa,extracted_income,extracted_admission_year,raw_text,parsed_json\n",
        )
        .unwrap();
        let record = store.record("x@example.com", &[], &extraction()).unwrap();
        assert_eq!(record.doc_id, 1);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_latest_for_picks_last_matching() {
        let (_dir, store) = store();
        store.record("a@example.com", &["one.pdf".into()], &extraction()).unwrap();
        store.record("b@example.com", &["two.pdf".into()], &extraction()).unwrap();
        store.record("a@example.com", &["three.pdf".into()], &extraction()).unwrap();

        let latest = store.latest_for("a@example.com").unwrap().unwrap();
        assert_eq!(latest.doc_id, 3);
        assert!(store.latest_for("c@example.com").unwrap().is_none());
    }
}
