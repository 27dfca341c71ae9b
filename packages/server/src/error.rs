use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use tagcloud_tags::StoreError;

/// Application error type returned by API handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Server error")]
    Store(#[from] StoreError),
}

/// Structured error response format: `{"error": ..., "details": ...}`.
/// Only the driver message is exposed, never internals.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store(err) => {
                error!("store operation failed: {err}");
                let body = ErrorResponse {
                    error: "Server error".to_string(),
                    details: Some(err.to_string()),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
