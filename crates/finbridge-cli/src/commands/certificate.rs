use finbridge_core::certificate::no_objection_certificate;
use finbridge_core::error::FinbridgeError;

pub fn run(bank: &str, app_id: u64) -> Result<(), FinbridgeError> {
    print!("{}", no_objection_certificate(bank, app_id));
    Ok(())
}
