use std::path::{Path, PathBuf};

use finbridge_core::error::FinbridgeError;
use finbridge_core::lenders::{builtin, load_lenders};
use finbridge_core::model::BorrowerProfile;
use finbridge_core::rank::rank;
use finbridge_core::store::documents::DocumentStore;

use crate::output;

pub fn run(
    data_dir: &Path,
    email: Option<String>,
    gpa: Option<String>,
    income: Option<String>,
    lenders_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), FinbridgeError> {
    // Start from the user's latest ingested document, then let explicit
    // flags override field by field.
    let mut profile = match email {
        Some(email) => {
            let documents = DocumentStore::in_dir(data_dir);
            documents
                .latest_for(&email)?
                .map(|record| BorrowerProfile::from_extracted(&record.fields))
                .unwrap_or_default()
        }
        None => BorrowerProfile::default(),
    };
    if gpa.is_some() {
        profile.gpa = gpa;
    }
    if income.is_some() {
        profile.income = income;
    }

    let lender_rules = match lenders_file {
        Some(path) => load_lenders(&path)?,
        None => builtin::default_lenders()?,
    };

    let ranked = rank(&profile, &lender_rules);

    match output_format {
        "json" => output::json::print(&ranked)?,
        _ => output::table::print_ranked(&ranked),
    }
    Ok(())
}
