//! Error types for the HTTP API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. A missing
//! entity is an explicit [`ApiError::NotFound`], never an unhandled fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hopglaze_db::DbError;

/// Errors that can occur in the HTTP API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A data layer operation failed.
    #[error("database error: {0}")]
    Database(#[from] DbError),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("database: {e}")),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
