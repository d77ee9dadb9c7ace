//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying
//! [`sqlx`] errors with additional context about which operation failed.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `SQLite` operation failed.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),

    /// A `SQLite` migration failed.
    #[error("SQLite migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An insert violated the per-table name uniqueness constraint.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
