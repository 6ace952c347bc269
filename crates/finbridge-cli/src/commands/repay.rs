use finbridge_core::error::FinbridgeError;
use finbridge_core::repay::repayment_summary;

use crate::output;

pub fn run(
    principal: f64,
    rate: f64,
    years: u32,
    output_format: &str,
) -> Result<(), FinbridgeError> {
    let summary = repayment_summary(principal, rate, years);

    match output_format {
        "json" => output::json::print(&summary)?,
        _ => output::table::print_summary(&summary),
    }
    Ok(())
}
