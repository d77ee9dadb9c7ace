//! Data layer for the hopglaze catalog service (`SQLite` via [`sqlx`]).
//!
//! `SQLite` holds the two catalog tables, `beer` and `donut`. Each table is
//! `id INTEGER PRIMARY KEY AUTOINCREMENT` plus `name TEXT NOT NULL UNIQUE`;
//! the uniqueness constraint is the one invariant the storage layer enforces.
//! Rows are only ever inserted (out-of-band) and read — nothing updates or
//! deletes them.
//!
//! # Modules
//!
//! - [`sqlite`] — `SQLite` connection pool, configuration, and migrations
//! - [`beer_store`] — Queries against the `beer` table
//! - [`donut_store`] — Queries against the `donut` table
//! - [`error`] — Shared error types

pub mod beer_store;
pub mod donut_store;
pub mod error;
pub mod sqlite;

// Re-export primary types for convenience.
pub use beer_store::{BeerRow, BeerStore};
pub use donut_store::{DonutRow, DonutStore};
pub use error::DbError;
pub use sqlite::{SqliteConfig, SqlitePool};
