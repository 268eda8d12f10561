//! Gymdesk console entry point.
//!
//! Loads configuration from the environment, opens the database (running
//! migrations), wires up the services, and hands control to the menu loop.

mod config;
mod input;
mod logging;
mod menus;
mod session;

use anyhow::Context;
use gymdesk_storage::{Database, DatabaseConfig};

use crate::config::CliConfig;
use crate::menus::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    logging::init(&config)?;
    tracing::info!(database = %config.database_path, "starting gymdesk");

    let db = Database::new(DatabaseConfig::new(config.database_path.as_str()))
        .await
        .context("failed to open database")?;

    println!("Welcome to the Gymdesk Management System!");

    let app = App::new(&db);
    let result = app.run().await;

    db.close().await;
    tracing::info!("gymdesk stopped");

    result
}
