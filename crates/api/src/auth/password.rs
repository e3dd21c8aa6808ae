//! Password hashing built on Argon2id.
//!
//! Stored hashes are PHC strings, so the variant, cost parameters, and
//! per-password salt all travel inside the hash column. Changing the
//! defaults later only affects newly created hashes; old ones keep
//! verifying with the parameters they were written with.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, SaltString};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::Argon2;

/// Hash a plaintext password with a fresh [`OsRng`] salt.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash string.
///
/// A mismatch is `Ok(false)`, not an error; `Err` is reserved for hashes
/// that cannot be parsed or other library failures.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, HashError> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(other) => Err(other),
    }
}
