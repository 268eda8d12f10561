//! Environment-driven configuration for the console binary.
//!
//! # Environment Variables
//!
//! - `GYMDESK_DATABASE`: SQLite database file path (default: gymdesk.db)
//! - `GYMDESK_LOG_FILE`: append-only log file path (default: gymdesk.log)
//! - `GYMDESK_LOG`: tracing filter directive (default: info)
//!
//! Values are read once at startup into an explicit struct that the rest
//! of the program receives by reference; nothing reads the environment
//! after that.

use std::env;

/// Complete console application configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// SQLite database file path
    pub database_path: String,

    /// Append-only log file path
    pub log_file: String,

    /// Tracing filter directive (e.g. "info", "gymdesk_services=debug")
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            database_path: "gymdesk.db".to_string(),
            log_file: "gymdesk.log".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            database_path: env::var("GYMDESK_DATABASE").unwrap_or(defaults.database_path),
            log_file: env::var("GYMDESK_LOG_FILE").unwrap_or(defaults.log_file),
            log_filter: env::var("GYMDESK_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
