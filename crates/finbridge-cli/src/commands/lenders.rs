use std::path::{Path, PathBuf};

use finbridge_core::error::FinbridgeError;
use finbridge_core::lenders::{builtin, load_lenders};

use crate::output;

pub fn list(lenders_file: Option<PathBuf>, output_format: &str) -> Result<(), FinbridgeError> {
    let lenders = match lenders_file {
        Some(path) => load_lenders(&path)?,
        None => builtin::default_lenders()?,
    };

    match output_format {
        "json" => output::json::print(&lenders)?,
        _ => output::table::print_lenders(&lenders),
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FinbridgeError> {
    let lenders = load_lenders(file)?;
    println!("OK: {} lender(s)", lenders.len());
    Ok(())
}
