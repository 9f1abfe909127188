//! Password hashing and verification.
//!
//! Credentials are stored as Argon2id hashes in PHC string format. The salt
//! is generated per hash, so hashing the same password twice produces
//! different strings.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::Error;

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// Returns `false` for a wrong password and `Err` only when the stored hash
/// cannot be parsed, which indicates corrupted data rather than bad input.
pub fn verify_password(password_hash: &str, password: &str) -> Result<bool, Error> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| Error::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
