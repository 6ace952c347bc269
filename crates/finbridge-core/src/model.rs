use serde::{Deserialize, Serialize};
use std::fmt;

use rust_decimal::Decimal;

/// Fields recovered from recognized document text.
///
/// Every field is optional: a pattern that does not match, or a capture that
/// does not parse, leaves the field `None` without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(rename = "extracted_name")]
    pub name: Option<String>,
    #[serde(rename = "extracted_dob")]
    pub dob: Option<String>,
    #[serde(rename = "extracted_college")]
    pub college: Option<String>,
    #[serde(rename = "extracted_course")]
    pub course: Option<String>,
    #[serde(rename = "extracted_gpa")]
    pub gpa: Option<Decimal>,
    #[serde(rename = "extracted_usn")]
    pub usn: Option<String>,
    #[serde(rename = "extracted_income")]
    pub income: Option<Decimal>,
    #[serde(rename = "extracted_admission_year")]
    pub admission_year: Option<i32>,
    #[serde(rename = "extracted_loan_amount")]
    pub loan_amount: Option<Decimal>,
}

/// Extraction output: structured fields plus the raw text they came from,
/// so a caller can re-derive or audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentExtraction {
    #[serde(flatten)]
    pub fields: ExtractedFields,
    pub raw_text: String,
}

/// One processed upload batch. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub doc_id: u64,
    pub email: String,
    pub upload_time: String,
    pub source_files: Vec<String>,
    pub fields: ExtractedFields,
    pub raw_text: String,
    /// JSON rendering of fields + raw text, kept verbatim for audit.
    pub parsed_json: String,
}

/// Borrower inputs to the ranking engine.
///
/// Values are kept as raw field text: the scorer must distinguish a missing
/// value from one that fails to parse, and both from a value that fails the
/// lender's rule.
#[derive(Debug, Clone, Default)]
pub struct BorrowerProfile {
    pub gpa: Option<String>,
    pub income: Option<String>,
}

impl BorrowerProfile {
    pub fn new(gpa: Option<String>, income: Option<String>) -> Self {
        BorrowerProfile { gpa, income }
    }

    /// Build a profile from extracted document fields.
    pub fn from_extracted(fields: &ExtractedFields) -> Self {
        BorrowerProfile {
            gpa: fields.gpa.map(|g| g.to_string()),
            income: fields.income.map(|i| i.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "Pending"),
            ApplicationStatus::Approved => write!(f, "Approved"),
            ApplicationStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A submitted loan application. The pipeline only ever creates these as
/// `Pending`; status changes come from the outside through the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub app_id: u64,
    pub user_email: String,
    pub bank_id: u64,
    pub status: ApplicationStatus,
    /// JSON-encoded mapping of the submitted form fields.
    pub filled_form_fields_json: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub appointment_id: u64,
    pub app_id: u64,
    pub user_email: String,
    pub bank_id: u64,
    pub scheduled_time: String,
    pub created_at: String,
    pub status: AppointmentStatus,
}

/// A registered account. `password_hash` is the PBKDF2 string produced by
/// [`crate::auth::hash_password`]; the plaintext is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u64,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub created_at: String,
    pub profile_completed: bool,
}
