use finbridge_core::error::FinbridgeError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), FinbridgeError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
