//! Passguard - salted bcrypt password hashing
//!
//! Hash a plaintext password for storage and verify a candidate against a
//! stored hash. Verification never errors: a malformed stored hash simply
//! fails to verify.
//!
//! ```no_run
//! use passguard::{hash_password, verify_password};
//!
//! let hashed = hash_password("my_secret_password")?;
//! assert!(verify_password("my_secret_password", &hashed));
//! assert!(!verify_password("wrong_password", &hashed));
//! # Ok::<(), passguard::HashError>(())
//! ```

pub mod auth;
pub mod config;
pub mod error;

pub use auth::{hash_password, verify_password, PasswordHasher};
pub use config::HasherConfig;
pub use error::{ConfigError, HashError};
