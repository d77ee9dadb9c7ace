//! HTTP API server for the hopglaze catalog service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Listing endpoints** (`/beers`, `/donuts`) returning every row of one
//!   catalog table as JSON
//! - **Lookup endpoints** (`/beer/{name}`, `/donut/{name}`) returning a
//!   single entity by exact name, with a structured 404 when absent
//! - **Pairing stub** (`/pair/beer?name=<beer>`) which performs the lookups
//!   but never produces a pairing — see [`pairing`]
//! - **Liveness check** (`/ping`)
//!
//! # Architecture
//!
//! Every handler borrows the `SQLite` pool from the shared [`AppState`]; the
//! service keeps no other state and never writes through HTTP. Rows are
//! inserted out-of-band via the `hopglaze-db` store API.
//!
//! [`AppState`]: state::AppState

pub mod error;
pub mod handlers;
pub mod pairing;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
