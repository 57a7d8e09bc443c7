//! Password hashing and verification
//!
//! Uses bcrypt for secure password hashing. Hashes are always emitted as
//! `$2b$`; `$2a$` and `$2y$` are also accepted on verification.

use crate::auth::format::{HashInfo, Version};
use crate::config::HasherConfig;
use crate::error::{HashError, HashResult};
use tracing::{debug, warn};

/// bcrypt's default work factor
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Lowest work factor bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Stateless bcrypt hasher carrying only its work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher at the default cost
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a hasher with an explicit cost
    pub fn with_cost(cost: u32) -> HashResult<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn from_config(config: &HasherConfig) -> HashResult<Self> {
        Self::with_cost(config.cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Input beyond 72 bytes is ignored by bcrypt.
    pub fn hash(&self, plain: &str) -> HashResult<String> {
        debug!(cost = self.cost, "Hashing password");
        let parts = bcrypt::hash_with_result(plain, self.cost)?;
        Ok(parts.format_for_version(bcrypt::Version::TwoB))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Malformed or unsupported hashes verify as `false`.
    pub fn verify(&self, plain: &str, hash: &str) -> bool {
        // bcrypt's own parser tolerates empty `$` segments and unpadded costs
        let Some(info) = HashInfo::parse(hash) else {
            warn!("Stored password hash is not a supported bcrypt string");
            return false;
        };

        match bcrypt::verify(plain, hash) {
            Ok(valid) => {
                debug!(valid, cost = info.cost, "Verified password");
                valid
            }
            Err(e) => {
                warn!(error = %e, "Stored password hash could not be checked");
                false
            }
        }
    }

    /// Whether a stored hash should be replaced with one from this hasher.
    ///
    /// True for unparseable hashes, older variants and lower costs.
    pub fn needs_rehash(&self, hash: &str) -> bool {
        match HashInfo::parse(hash) {
            Some(info) => info.version != Version::TwoB || info.cost < self.cost,
            None => true,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash a password using bcrypt at the default cost
pub fn hash_password(plain: &str) -> HashResult<String> {
    PasswordHasher::new().hash(plain)
}

/// Verify a password against a hash
pub fn verify_password(plain: &str, hash: &str) -> bool {
    PasswordHasher::new().verify(plain, hash)
}
