//! REST API endpoint handlers for the catalog server.
//!
//! All handlers read from `SQLite` through the store handle carried in the
//! shared [`AppState`]. Nothing here writes — rows are inserted out-of-band
//! through the store API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/ping` | Liveness check, literal `200 OK` |
//! | `GET` | `/beers` | List all beers |
//! | `GET` | `/donuts` | List all donuts |
//! | `GET` | `/beer/{name}` | Look up a beer by exact name |
//! | `GET` | `/donut/{name}` | Look up a donut by exact name |
//! | `GET` | `/pair/beer` | Pairing stub (`?name=<beer>`) |

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use hopglaze_db::{BeerStore, DonutStore};

use crate::error::ApiError;
use crate::pairing;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /pair/beer` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct PairQuery {
    /// Name of the beer to pair. Tolerated when absent — the endpoint
    /// answers `200 OK` either way.
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /ping -- liveness check
// ---------------------------------------------------------------------------

/// Answer the literal text `200 OK` regardless of store state.
pub async fn ping() -> &'static str {
    "200 OK"
}

// ---------------------------------------------------------------------------
// GET /beers -- list beers
// ---------------------------------------------------------------------------

/// List all beers in storage order.
///
/// Returns `{"beers": [{"id": int, "name": string}, ...]}`; an empty store
/// yields `{"beers": []}`.
pub async fn list_beers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let beers = BeerStore::new(state.db.pool()).list().await?;

    Ok(Json(serde_json::json!({ "beers": beers })))
}

// ---------------------------------------------------------------------------
// GET /donuts -- list donuts
// ---------------------------------------------------------------------------

/// List all donuts in storage order.
pub async fn list_donuts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let donuts = DonutStore::new(state.db.pool()).list().await?;

    Ok(Json(serde_json::json!({ "donuts": donuts })))
}

// ---------------------------------------------------------------------------
// GET /beer/{name} -- single beer lookup
// ---------------------------------------------------------------------------

/// Look up a beer by exact name.
///
/// Returns the flat `{"id": int, "name": string}` form, or a structured 404
/// when no beer carries that name.
pub async fn get_beer(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let beer = BeerStore::new(state.db.pool())
        .find_by_name(&name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("beer {name}")))?;

    Ok(Json(beer))
}

// ---------------------------------------------------------------------------
// GET /donut/{name} -- single donut lookup
// ---------------------------------------------------------------------------

/// Look up a donut by exact name.
pub async fn get_donut(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let donut = DonutStore::new(state.db.pool())
        .find_by_name(&name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("donut {name}")))?;

    Ok(Json(donut))
}

// ---------------------------------------------------------------------------
// GET /pair/beer -- pairing stub
// ---------------------------------------------------------------------------

/// Attempt to pair a beer with a donut.
///
/// Performs the lookups (beer by name, all donuts) and consults
/// [`pairing::best_match`], which never selects anything. Answers the
/// literal text `200 OK` unconditionally — a missing or unknown beer name
/// is not an error here.
pub async fn pair_beer(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PairQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let donuts = DonutStore::new(state.db.pool()).list().await?;

    let beer = match params.name.as_deref() {
        Some(name) => BeerStore::new(state.db.pool()).find_by_name(name).await?,
        None => None,
    };

    if let Some(beer) = beer {
        match pairing::best_match(&beer, &donuts) {
            Some(donut) => {
                tracing::info!(beer = beer.name, donut = donut.name, "pairing selected");
            }
            None => tracing::debug!(beer = beer.name, "no pairing selected"),
        }
    }

    Ok("200 OK")
}
