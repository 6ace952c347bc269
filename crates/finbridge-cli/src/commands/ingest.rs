use std::path::{Path, PathBuf};

use finbridge_core::error::FinbridgeError;
use finbridge_core::process_upload;
use finbridge_core::recognize::pdftoppm::PdftoppmRasterizer;
use finbridge_core::recognize::tesseract::TesseractRecognizer;
use finbridge_core::store::documents::DocumentStore;

use crate::output;

pub fn run(
    data_dir: &Path,
    email: &str,
    files: Vec<PathBuf>,
    output_format: &str,
) -> Result<(), FinbridgeError> {
    let recognizer = TesseractRecognizer::new();
    let rasterizer = PdftoppmRasterizer::new();
    let documents = DocumentStore::in_dir(data_dir);

    let record = process_upload(email, &files, &recognizer, &rasterizer, &documents)?;

    match output_format {
        "json" => output::json::print(&record)?,
        _ => output::table::print_document(&record),
    }
    Ok(())
}
