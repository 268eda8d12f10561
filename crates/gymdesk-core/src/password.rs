//! Password hashing and verification.
//!
//! Wraps bcrypt with a fixed work factor so there is exactly one place in
//! the codebase that decides how credentials are hashed. The salt is
//! generated internally per call, so hashing the same input twice yields
//! two different strings that both verify.
//!
//! # Examples
//!
//! ```
//! use gymdesk_core::password;
//!
//! let hash = password::hash("hunter2").unwrap();
//! assert!(password::verify("hunter2", &hash).unwrap());
//! assert!(!password::verify("wrong", &hash).unwrap());
//! ```

use crate::error::{Error, Result};

/// Bcrypt work factor for release builds.
const WORK_FACTOR: u32 = 12;

/// Lowest cost bcrypt accepts; roughly 250x cheaper than cost 12.
const TEST_WORK_FACTOR: u32 = 4;

/// Every bcrypt hash starts with a `$2` version marker ($2a, $2b, $2y).
const BCRYPT_PREFIX: &str = "$2";

/// Work factor for the current build.
///
/// Debug and test builds use the bcrypt minimum so suites that hash many
/// credentials stay fast; release builds always pay the full cost.
fn work_factor() -> u32 {
    if cfg!(debug_assertions) {
        TEST_WORK_FACTOR
    } else {
        WORK_FACTOR
    }
}

/// Hash a plaintext password with bcrypt.
///
/// # Errors
///
/// Returns [`Error::Hash`] if the underlying bcrypt call fails.
pub fn hash(plain: &str) -> Result<String> {
    bcrypt::hash(plain, work_factor()).map_err(|e| Error::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// A stored value that does not look like a bcrypt hash is an input format
/// error, not a mismatch: the caller handed us something that was never
/// produced by [`hash`], and silently returning `false` would mask data
/// corruption.
///
/// # Errors
///
/// Returns [`Error::InvalidHashFormat`] if `stored` is not shaped like a
/// bcrypt hash, or [`Error::Hash`] if the comparison itself fails.
pub fn verify(plain: &str, stored: &str) -> Result<bool> {
    if !stored.starts_with(BCRYPT_PREFIX) {
        return Err(Error::InvalidHashFormat);
    }

    bcrypt::verify(plain, stored).map_err(|e| Error::Hash(e.to_string()))
}
