pub mod auth;
pub mod certificate;
pub mod error;
pub mod extract;
pub mod lenders;
pub mod model;
pub mod rank;
pub mod recognize;
pub mod repay;
pub mod store;

use std::path::PathBuf;

use error::FinbridgeError;
use extract::extract_document;
use model::{ApplicationRecord, AppointmentRecord, DocumentRecord};
use recognize::{recognize_document, PageRasterizer, TextRecognizer};
use store::applications::ApplicationStore;
use store::appointments::AppointmentStore;
use store::documents::DocumentStore;

/// Main API entry point: recognize an upload batch, extract its fields and
/// record the result.
///
/// Every file is recognized independently (PDFs page by page); the texts are
/// joined with newlines before field extraction, so one batch yields one
/// document record. Recognition failures abort the batch; extraction-field
/// failures never do.
pub fn process_upload(
    email: &str,
    files: &[PathBuf],
    recognizer: &dyn TextRecognizer,
    rasterizer: &dyn PageRasterizer,
    documents: &DocumentStore,
) -> Result<DocumentRecord, FinbridgeError> {
    let mut texts = Vec::with_capacity(files.len());
    for file in files {
        texts.push(recognize_document(file, recognizer, rasterizer)?);
    }
    let joined = texts.join("\n");
    tracing::info!(
        email,
        files = files.len(),
        chars = joined.len(),
        backend = recognizer.backend_name(),
        "upload recognized"
    );

    let extraction = extract_document(&joined);
    let source_files: Vec<String> = files
        .iter()
        .map(|f| f.to_string_lossy().into_owned())
        .collect();
    documents.record(email, &source_files, &extraction)
}

/// Submit a loan application for a lender.
pub fn submit_application(
    applications: &ApplicationStore,
    user_email: &str,
    bank_id: u64,
    filled_fields: &serde_json::Value,
) -> Result<ApplicationRecord, FinbridgeError> {
    applications.append(user_email, bank_id, filled_fields)
}

/// Schedule a bank appointment against an existing application.
///
/// Fails with `ApplicationNotFound` when `app_id` does not exist; the
/// appointment row always links back to a real application.
pub fn schedule_appointment(
    applications: &ApplicationStore,
    appointments: &AppointmentStore,
    app_id: u64,
    when: &str,
) -> Result<AppointmentRecord, FinbridgeError> {
    let application = applications
        .get(app_id)?
        .ok_or(FinbridgeError::ApplicationNotFound { app_id })?;
    appointments.schedule(&application, when)
}
