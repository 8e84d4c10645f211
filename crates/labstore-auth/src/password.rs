//! Password hashing with Argon2id.
//!
//! User passwords are hashed on every write (registration and password
//! update) using Argon2id with OWASP-recommended parameters.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

// OWASP 2024 recommended parameters: m=19456 KiB, t=2, p=1.
const MEMORY_KIB: u32 = 19456;
const ITERATIONS: u32 = 2;
const PARALLELISM: u32 = 1;

fn hasher() -> Argon2<'static> {
    // These are hardcoded constants that are always valid; failure would
    // indicate a bug in the argon2 crate, not a runtime condition.
    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, None)
        .expect("OWASP Argon2 parameters are valid constants");
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
}

/// Hash a password using Argon2id.
///
/// # Returns
///
/// A PHC-formatted hash string.
///
/// # Errors
///
/// Returns `AuthError::HashingFailed` if hashing fails.
///
/// # Example
///
/// ```rust
/// use labstore_auth::hash_password;
///
/// let hash = hash_password("my-secure-password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = hasher()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a password against an Argon2id hash.
///
/// # Returns
///
/// `Ok(true)` if password matches, `Ok(false)` if not.
///
/// # Errors
///
/// Returns `AuthError::InvalidHashFormat` if the hash format is invalid.
///
/// # Example
///
/// ```rust
/// use labstore_auth::{hash_password, verify_password};
///
/// let hash = hash_password("my-password").unwrap();
/// assert!(verify_password("my-password", &hash).unwrap());
/// assert!(!verify_password("wrong-password", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;

    match hasher().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(_) => Ok(false), // Other errors also treated as non-match
    }
}
