//! Error handling module
//!
//! Provides the error types for hashing and configuration.
//! Verification deliberately has no error type: every failure is `false`.

use thiserror::Error;

/// Errors raised while producing a password hash
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Invalid cost factor: {0} (expected {min}..={max})", min = crate::auth::MIN_COST, max = crate::auth::MAX_COST)]
    InvalidCost(u32),

    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Result type alias for hashing operations
pub type HashResult<T> = Result<T, HashError>;
