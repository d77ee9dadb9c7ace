//! Shared application state for the API server.
//!
//! [`AppState`] carries the store handle that every request borrows. The
//! handle is passed explicitly through the router state — there is no
//! process-global database connection.

use hopglaze_db::SqlitePool;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the catalog database.
    pub db: SqlitePool,
}

impl AppState {
    /// Create application state around a connected pool.
    pub const fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}
