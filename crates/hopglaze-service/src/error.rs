//! Error types for service startup.

use hopglaze_db::DbError;
use hopglaze_server::ServerError;

/// Errors that can occur while bringing the service up.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A configuration value was missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The data layer failed to connect or migrate.
    #[error(transparent)]
    Db(#[from] DbError),

    /// The HTTP server failed to bind or serve.
    #[error(transparent)]
    Server(#[from] ServerError),
}
