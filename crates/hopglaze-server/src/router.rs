//! Axum router construction for the catalog API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin access.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the catalog server.
///
/// The router includes:
/// - `GET /ping` -- liveness check
/// - `GET /beers` -- list beers
/// - `GET /donuts` -- list donuts
/// - `GET /beer/{name}` -- single beer by name
/// - `GET /donut/{name}` -- single donut by name
/// - `GET /pair/beer` -- pairing stub
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/ping", get(handlers::ping))
        // REST API
        .route("/beers", get(handlers::list_beers))
        .route("/donuts", get(handlers::list_donuts))
        .route("/beer/{name}", get(handlers::get_beer))
        .route("/donut/{name}", get(handlers::get_donut))
        .route("/pair/beer", get(handlers::pair_beer))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
