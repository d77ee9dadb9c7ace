//! Integration tests for the catalog API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Each test gets its own in-memory `SQLite`
//! database, migrated and seeded through the store API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hopglaze_db::{BeerStore, DonutStore, SqlitePool};
use hopglaze_server::router::build_router;
use hopglaze_server::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

/// Migrated but unseeded state.
async fn make_empty_state() -> Arc<AppState> {
    let pool = SqlitePool::connect_in_memory()
        .await
        .expect("failed to open in-memory SQLite");
    pool.run_migrations().await.expect("failed to run migrations");
    Arc::new(AppState::new(pool))
}

/// State seeded with one beer ("Lager", id 1) and one donut ("Glazed", id 1).
async fn make_test_state() -> Arc<AppState> {
    let state = make_empty_state().await;

    BeerStore::new(state.db.pool())
        .insert("Lager")
        .await
        .expect("failed to seed beer");
    DonutStore::new(state.db.pool())
        .insert("Glazed")
        .await
        .expect("failed to seed donut");

    state
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_to_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_ping_returns_literal_200_ok() {
    let state = make_empty_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_text(response.into_body()).await, "200 OK");
}

#[tokio::test]
async fn test_list_beers_empty_store() {
    let state = make_empty_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/beers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({"beers": []}));
}

#[tokio::test]
async fn test_list_beers() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/beers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json,
        serde_json::json!({"beers": [{"id": 1, "name": "Lager"}]})
    );
}

#[tokio::test]
async fn test_list_donuts() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/donuts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json,
        serde_json::json!({"donuts": [{"id": 1, "name": "Glazed"}]})
    );
}

#[tokio::test]
async fn test_get_beer_by_name() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/beer/Lager").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({"id": 1, "name": "Lager"}));
}

#[tokio::test]
async fn test_get_beer_not_found() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/beer/Unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 404);
    assert!(json["error"].as_str().unwrap().contains("Unknown"));
}

#[tokio::test]
async fn test_get_donut_by_name() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/donut/Glazed").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({"id": 1, "name": "Glazed"}));
}

#[tokio::test]
async fn test_get_donut_not_found() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/donut/Cruller").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pair_beer_returns_200_ok_text() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/pair/beer?name=Lager")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Never a computed pairing -- the literal text, unconditionally.
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_text(response.into_body()).await, "200 OK");
}

#[tokio::test]
async fn test_pair_beer_unknown_name_still_200() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/pair/beer?name=Nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_text(response.into_body()).await, "200 OK");
}

#[tokio::test]
async fn test_pair_beer_missing_name_still_200() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/pair/beer").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_text(response.into_body()).await, "200 OK");
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/pretzels").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
