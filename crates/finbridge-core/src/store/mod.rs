//! Flat tabular persistence.
//!
//! Every store is a comma-separated file with a header row, read whole and
//! rewritten whole on each mutation (write to a temp file in the same
//! directory, then atomically rename over the original). Identifiers are
//! assigned max-plus-one at append time. Both patterns assume a single
//! writer: there is no lock or compare-and-swap guarding the
//! read-modify-write cycle, and concurrent writers can mint the same id or
//! clobber each other's rows.

pub mod applications;
pub mod appointments;
pub mod documents;
pub mod users;

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FinbridgeError;

/// Upload timestamps: ISO-8601, UTC.
pub(crate) fn now_iso() -> String {
    Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Ledger timestamps: `YYYY-MM-DD HH:MM:SS`, UTC.
pub(crate) fn now_stamp() -> String {
    Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Next identifier under the max-plus-one discipline: one more than the
/// current maximum, or 1 for an empty store.
pub(crate) fn next_id<T>(rows: &[T], id: impl Fn(&T) -> u64) -> u64 {
    rows.iter().map(id).max().map_or(1, |max| max + 1)
}

/// Read every row of a tabular store.
///
/// A missing or zero-byte file reads as an empty store (the expected layout
/// is recreated on the next write); a header-only file reads as zero rows.
pub(crate) fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FinbridgeError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| FinbridgeError::StoreCorrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?);
    }
    Ok(rows)
}

/// Rewrite a tabular store in full: header row plus every record, staged in
/// a temp file and renamed into place.
pub(crate) fn write_table<T: Serialize>(
    path: &Path,
    columns: &[&str],
    rows: &[T],
) -> Result<(), FinbridgeError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FinbridgeError::Io(e.into_error()))?;

    atomic_replace(path, &bytes)
}

fn atomic_replace(path: &Path, contents: &[u8]) -> Result<(), FinbridgeError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            parent.to_path_buf()
        }
        _ => PathBuf::from("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.persist(path).map_err(|e| FinbridgeError::Io(e.error))?;
    Ok(())
}
