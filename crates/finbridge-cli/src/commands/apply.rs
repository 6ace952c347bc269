use std::path::Path;

use finbridge_core::error::FinbridgeError;
use finbridge_core::store::applications::ApplicationStore;
use finbridge_core::submit_application;

use crate::output;

pub fn run(
    data_dir: &Path,
    email: &str,
    bank_id: u64,
    form_json: &str,
) -> Result<(), FinbridgeError> {
    let filled_fields: serde_json::Value = serde_json::from_str(form_json)?;
    let applications = ApplicationStore::in_dir(data_dir);

    let record = submit_application(&applications, email, bank_id, &filled_fields)?;
    println!("Application {} saved.", record.app_id);
    Ok(())
}

pub fn list(data_dir: &Path, email: &str, output_format: &str) -> Result<(), FinbridgeError> {
    let applications = ApplicationStore::in_dir(data_dir);
    let records = applications.list_for(email)?;

    match output_format {
        "json" => output::json::print(&records)?,
        _ => output::table::print_applications(&records),
    }
    Ok(())
}
