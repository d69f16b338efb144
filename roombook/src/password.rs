//! Salted password hashing.
//!
//! Passwords are stored as Argon2id PHC strings. Verification goes through
//! `argon2`'s `PasswordVerifier`, which compares digests in constant time.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Hash a password with a fresh random salt.
///
/// # Errors
///
/// Returns [`Error::PasswordHash`] if the hasher rejects its input.
///
/// # Examples
///
/// ```
/// use roombook::password::{hash_password, verify_password};
///
/// let hash = hash_password("hunter22").unwrap();
/// assert!(hash.starts_with("$argon2"));
/// assert!(verify_password("hunter22", &hash));
/// assert!(!verify_password("hunter23", &hash));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash(e.to_string()))
}

/// Verify a password against a stored PHC hash string.
///
/// A malformed stored hash never verifies.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

/// A real Argon2 hash of a throwaway secret, computed once per process.
///
/// Lookups for unknown accounts verify against it so they cost the same as
/// lookups for existing ones.
pub(crate) fn dummy_hash() -> Option<&'static str> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DUMMY_HASH
        .get_or_init(|| hash_password("roombook-no-such-account").ok())
        .as_deref()
}

/// Runs a verification whose result is discarded.
pub(crate) fn verify_against_dummy(password: &str) {
    if let Some(hash) = dummy_hash() {
        let _ = verify_password(password, hash);
    }
}

/// Check that a password is acceptable before hashing it.
///
/// # Errors
///
/// Returns a validation error for an empty password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::Validation {
            field: "password".into(),
            message: "password must be non-empty".into(),
        });
    }
    Ok(())
}
