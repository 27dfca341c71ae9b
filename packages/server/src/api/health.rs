use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::api::AppState;

/// Database liveness probe backing `GET /test-db`.
pub async fn test_db(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.tags.store().probe().await {
        Ok(now) => (StatusCode::OK, Json(json!({ "success": true, "time": now }))),
        Err(err) => {
            error!("database probe failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Database connection failed" })),
            )
        }
    }
}
