use std::path::{Path, PathBuf};

use crate::auth::{hash_password, verify_password};
use crate::error::FinbridgeError;
use crate::model::UserAccount;
use crate::store::{next_id, now_iso, read_table, write_table};

const COLUMNS: [&str; 7] = [
    "id",
    "email",
    "password_hash",
    "full_name",
    "phone",
    "created_at",
    "profile_completed",
];

/// Fields a profile update may touch. `None` leaves the field as is.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub profile_completed: Option<bool>,
}

/// Flat credential store keyed by email. Single-writer (see module docs).
///
/// This is deliberately not a security subsystem: passwords are salted and
/// iterated (see [`crate::auth`]), but there are no sessions or tokens —
/// authentication state lives entirely with the caller.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CredentialStore { path: path.into() }
    }

    /// `users.csv` under the given data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("users.csv"))
    }

    /// Create an account. The email must not already be registered.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        phone: &str,
    ) -> Result<UserAccount, FinbridgeError> {
        let mut rows: Vec<UserAccount> = read_table(&self.path)?;
        if rows.iter().any(|u| u.email == email) {
            return Err(FinbridgeError::DuplicateRegistration {
                email: email.to_string(),
            });
        }

        let account = UserAccount {
            id: next_id(&rows, |u: &UserAccount| u.id),
            email: email.to_string(),
            password_hash: hash_password(password),
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            created_at: now_iso(),
            profile_completed: false,
        };

        rows.push(account.clone());
        write_table(&self.path, &COLUMNS, &rows)?;
        tracing::info!(id = account.id, email, "account registered");
        Ok(account)
    }

    /// Verify credentials and return the account profile.
    pub fn login(&self, email: &str, password: &str) -> Result<UserAccount, FinbridgeError> {
        let rows: Vec<UserAccount> = read_table(&self.path)?;
        let account = rows
            .into_iter()
            .find(|u| u.email == email)
            .ok_or_else(|| FinbridgeError::UserNotFound {
                email: email.to_string(),
            })?;

        if verify_password(password, &account.password_hash) {
            Ok(account)
        } else {
            Err(FinbridgeError::InvalidCredentials)
        }
    }

    pub fn get(&self, id: u64) -> Result<Option<UserAccount>, FinbridgeError> {
        let rows: Vec<UserAccount> = read_table(&self.path)?;
        Ok(rows.into_iter().find(|u| u.id == id))
    }

    /// Apply a profile update. Returns false when the id is unknown.
    pub fn update_profile(
        &self,
        id: u64,
        update: ProfileUpdate,
    ) -> Result<bool, FinbridgeError> {
        let mut rows: Vec<UserAccount> = read_table(&self.path)?;
        let Some(account) = rows.iter_mut().find(|u| u.id == id) else {
            return Ok(false);
        };

        if let Some(full_name) = update.full_name {
            account.full_name = full_name;
        }
        if let Some(phone) = update.phone {
            account.phone = phone;
        }
        if let Some(profile_completed) = update.profile_completed {
            account.profile_completed = profile_completed;
        }

        write_table(&self.path, &COLUMNS, &rows)?;
        Ok(true)
    }
}
