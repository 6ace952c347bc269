use std::path::PathBuf;

use finbridge_core::error::FinbridgeError;
use finbridge_core::extract::extract_document;
use finbridge_core::recognize::pdftoppm::PdftoppmRasterizer;
use finbridge_core::recognize::tesseract::TesseractRecognizer;
use finbridge_core::recognize::recognize_document;

use crate::output;

/// Recognize and extract without touching any store.
pub fn run(files: Vec<PathBuf>, output_format: &str) -> Result<(), FinbridgeError> {
    let recognizer = TesseractRecognizer::new();
    let rasterizer = PdftoppmRasterizer::new();

    let mut texts = Vec::with_capacity(files.len());
    for file in &files {
        texts.push(recognize_document(file, &recognizer, &rasterizer)?);
    }
    let extraction = extract_document(&texts.join("\n"));

    match output_format {
        "json" => output::json::print(&extraction)?,
        _ => output::table::print_fields(&extraction.fields),
    }
    Ok(())
}
