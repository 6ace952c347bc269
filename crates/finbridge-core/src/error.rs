use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FinbridgeError {
    #[error("tesseract not found. Install tesseract-ocr: brew install tesseract (macOS) or apt install tesseract-ocr (Linux)")]
    TesseractNotFound,

    #[error("pdftoppm not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftoppmNotFound,

    #[error("{tool} failed with exit code {code}: {stderr}")]
    RecognizerFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("unsupported file type '{extension}'. Supported: .pdf .png .jpg .jpeg .tiff .bmp .gif")]
    UnsupportedFormat { extension: String },

    #[error("text recognition failed for {path}: {reason}")]
    Recognition { path: PathBuf, reason: String },

    #[error("failed to load lender table from {path}: {reason}")]
    LenderTableLoad { path: PathBuf, reason: String },

    #[error("invalid lender table: {0}")]
    LenderTableInvalid(String),

    #[error("email '{email}' is already registered")]
    DuplicateRegistration { email: String },

    #[error("no account found for '{email}'")]
    UserNotFound { email: String },

    #[error("wrong password")]
    InvalidCredentials,

    #[error("no application with id {app_id}")]
    ApplicationNotFound { app_id: u64 },

    #[error("store {path} is corrupt: {reason}")]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
