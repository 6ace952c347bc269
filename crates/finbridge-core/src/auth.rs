use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
const SALT_LENGTH: usize = 16;
const HASH_LENGTH: usize = 32;

/// Hash a password with PBKDF2-HMAC-SHA256 and a fresh random salt.
///
/// Stored format: `pbkdf2_sha256$<iterations>$<salt_b64>$<hash_b64>`. The
/// iteration count travels inside the string, so verification keeps working
/// if the constant changes later.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut derived = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut derived);

    format!(
        "pbkdf2_sha256${}${}${}",
        PBKDF2_ITERATIONS,
        BASE64.encode(salt),
        BASE64.encode(derived)
    )
}

/// Verify a password against a stored hash string.
///
/// Malformed hashes verify as false rather than erroring; the comparison of
/// derived bytes is constant-time.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    if parts.next() != Some("pbkdf2_sha256") {
        return false;
    }
    let (Some(iterations), Some(salt_b64), Some(hash_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (BASE64.decode(salt_b64), BASE64.decode(hash_b64)) else {
        return false;
    };
    if iterations == 0 || expected.len() != HASH_LENGTH {
        return false;
    }

    let mut derived = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, iterations, &mut derived);
    derived.as_slice().ct_eq(expected.as_slice()).into()
}
