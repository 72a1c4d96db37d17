//! Password hashing and verification.
//!
//! Thin wrapper over bcrypt. The comparison inside `bcrypt::verify` is
//! constant-time with respect to the password content.

use bcrypt::DEFAULT_COST;

use crate::error::AppError;

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    bcrypt::hash(plain, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("failed to hash password: {e}")))
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash is an internal error, not an authentication
/// failure; callers turn `Ok(false)` into the generic credentials error.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(plain, hash)
        .map_err(|e| AppError::internal(format!("failed to verify password hash: {e}")))
}
