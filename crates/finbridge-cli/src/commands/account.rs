use std::path::Path;

use finbridge_core::error::FinbridgeError;
use finbridge_core::store::users::CredentialStore;

pub fn register(
    data_dir: &Path,
    email: &str,
    password: &str,
    name: &str,
    phone: &str,
) -> Result<(), FinbridgeError> {
    let users = CredentialStore::in_dir(data_dir);
    let account = users.register(email, password, name, phone)?;
    println!("Registered {} (id {})", account.email, account.id);
    Ok(())
}

pub fn login(data_dir: &Path, email: &str, password: &str) -> Result<(), FinbridgeError> {
    let users = CredentialStore::in_dir(data_dir);
    let account = users.login(email, password)?;

    let display_name = if account.full_name.is_empty() {
        account.email.as_str()
    } else {
        account.full_name.as_str()
    };
    println!("Welcome, {display_name}");
    Ok(())
}
