//! `SQLite` connection pool and configuration.
//!
//! `SQLite` is the only store for the catalog service. It holds the `beer`
//! and `donut` tables and enforces the per-table name uniqueness invariant.
//!
//! Uses [`sqlx`] with runtime query construction (not compile-time checked)
//! to avoid requiring a live database at build time. All queries are
//! parameterized to prevent SQL injection.

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::error::DbError;

/// Default maximum number of connections in the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default connection acquire timeout in seconds.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Configuration for the `SQLite` connection pool.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// `SQLite` connection URL.
    ///
    /// Format: `sqlite://path/to/database.db`
    pub url: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Connection acquire timeout.
    pub acquire_timeout: Duration,
}

impl SqliteConfig {
    /// Create a new configuration from a database URL.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Set the maximum number of connections.
    #[must_use]
    pub const fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the connection acquire timeout.
    #[must_use]
    pub const fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

/// Connection pool handle to `SQLite`.
///
/// Wraps a [`sqlx::SqlitePool`] and provides access to the beer and donut
/// store operations.
#[derive(Clone)]
pub struct SqlitePool {
    pool: Pool<Sqlite>,
}

impl SqlitePool {
    /// Connect to `SQLite` using the provided configuration.
    ///
    /// The database file is created if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the connection fails.
    /// Returns [`DbError::Config`] if the URL cannot be parsed.
    pub async fn connect(config: &SqliteConfig) -> Result<Self, DbError> {
        let connect_options: SqliteConnectOptions = config
            .url
            .parse()
            .map_err(|e: sqlx::Error| DbError::Config(format!("invalid database URL: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(connect_options.create_if_missing(true))
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "connected to SQLite"
        );

        Ok(Self { pool })
    }

    /// Connect using a database URL string with default pool settings.
    ///
    /// Convenience wrapper around [`SqlitePool::connect`] with
    /// [`SqliteConfig::new`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection fails.
    pub async fn connect_url(url: &str) -> Result<Self, DbError> {
        let config = SqliteConfig::new(url);
        Self::connect(&config).await
    }

    /// Connect to a private in-memory database.
    ///
    /// The pool is capped at a single connection with no idle reaping so the
    /// in-memory database lives exactly as long as the pool. Intended for
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the connection fails.
    pub async fn connect_in_memory() -> Result<Self, DbError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(SqliteConnectOptions::new().in_memory(true))
            .await?;

        Ok(Self { pool })
    }

    /// Run all pending migrations from the `migrations/` directory.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Migration`] if any migration fails.
    pub async fn run_migrations(&self) -> Result<(), DbError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("database migrations completed");
        Ok(())
    }

    /// Return a reference to the underlying [`sqlx::SqlitePool`].
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Close all connections in the pool gracefully.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite pool closed");
    }
}
