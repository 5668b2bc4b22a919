//! Credential hashing.
//!
//! Passwords are stored as bcrypt hashes with a fixed work factor. A wrong
//! password is reported as `Ok(false)`; only a stored value that is not a
//! bcrypt hash produces an error.

use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt work factor for every stored password.
pub const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
