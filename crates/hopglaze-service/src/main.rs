//! Entry point for the hopglaze catalog service.
//!
//! Wires the pieces together: loads configuration from the environment,
//! connects to `SQLite` and applies migrations, then serves the catalog API
//! until the process is terminated.
//!
//! ```text
//! env config --> SqlitePool (+ migrations) --> AppState --> Axum server
//! ```

mod config;
mod error;

use std::sync::Arc;

use hopglaze_db::{SqliteConfig, SqlitePool};
use hopglaze_server::{start_server, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// connects to the database, then runs the HTTP server indefinitely.
///
/// # Errors
///
/// Returns an error if initialization or the server loop fails.
#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("hopglaze-service starting");

    // Load configuration from environment
    let config = ServiceConfig::from_env()?;
    info!(
        database_url = config.database_url,
        http_host = config.http_host,
        http_port = config.http_port,
        "configuration loaded"
    );

    // Connect to SQLite and bring the schema up to date
    let pool = SqlitePool::connect(&SqliteConfig::new(&config.database_url)).await?;
    pool.run_migrations().await?;

    let state = Arc::new(AppState::new(pool));

    let server_config = ServerConfig {
        host: config.http_host,
        port: config.http_port,
    };

    info!("catalog service initialized, serving requests");
    start_server(&server_config, state).await?;

    Ok(())
}
