use crate::error::FinbridgeError;
use crate::lenders::schema::LenderRule;

const DEFAULT_LENDERS_CSV: &str = include_str!("../../../../lenders/default-lenders.csv");

/// The builtin lender reference table shipped with the crate.
///
/// Used when no custom table is supplied; same layout as a user-provided
/// lenders CSV.
pub fn default_lenders() -> Result<Vec<LenderRule>, FinbridgeError> {
    crate::lenders::parse_lenders(DEFAULT_LENDERS_CSV)
}
