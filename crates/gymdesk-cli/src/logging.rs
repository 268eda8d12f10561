//! File-based logging setup.
//!
//! All tracing output goes to an append-only text file so the interactive
//! menus keep stdout to themselves. The filter is taken from the
//! configuration (`GYMDESK_LOG`), defaulting to `info`.

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Initialize the global tracing subscriber writing to the configured file.
pub fn init(config: &CliConfig) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file))?;

    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
