//! Password hashing primitives.
//!
//! PBKDF2-HMAC-SHA-256 with 65 536 iterations and a 256-bit output,
//! base64-encoded — the derivation parameters the stored credential rows
//! were produced with, so they must not change without a migration.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use pbkdf2::pbkdf2_hmac;
use rand::{Rng, distributions::Alphanumeric, rngs::OsRng};
use sha2::Sha256;

/// PBKDF2 iteration count used for every stored credential.
const ITERATIONS: u32 = 65_536;

/// Derived key length in bytes (256 bits).
const KEY_LEN: usize = 32;

/// Length of a generated salt in characters.
const SALT_LEN: usize = 8;

/// Hash a password with the given salt.
///
/// Returns the base64 encoding of the derived key. The same password and
/// salt always produce the same hash, which is what verification relies on.
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), ITERATIONS, &mut key);
    STANDARD.encode(key)
}

/// Generate a random 8-character alphanumeric salt.
///
/// Drawn from the operating system's CSPRNG.
#[must_use]
pub fn generate_salt() -> String {
    (0..SALT_LEN)
        .map(|_| OsRng.sample(Alphanumeric) as char)
        .collect()
}
