//! Authentication module
//!
//! Provides bcrypt password hashing and verification. User storage and
//! session handling belong to the caller.

mod format;
mod password;

pub use format::{is_bcrypt_hash, HashInfo, Version, HASH_LEN};
pub use password::{
    hash_password, verify_password, PasswordHasher, DEFAULT_COST, MAX_COST, MIN_COST,
};
