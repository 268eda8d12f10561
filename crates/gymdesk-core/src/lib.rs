//! Shared core for the gymdesk management system.
//!
//! This crate holds the pieces every other gymdesk crate relies on:
//! the common error type and the bcrypt-backed password module used by
//! registration and login flows so plaintext passwords are never stored.

pub mod error;
pub mod password;

pub use error::{Error, Result};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
