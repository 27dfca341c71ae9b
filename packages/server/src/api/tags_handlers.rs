// ABOUTME: HTTP request handlers for tag operations
// ABOUTME: List, upsert, delete, and tag-cloud sampling endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use tagcloud_tags::{Tag, UpsertRequest};

use crate::api::AppState;
use crate::error::AppError;

/// List every tag row.
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, AppError> {
    let tags = state.tags.list().await?;
    Ok(Json(tags))
}

/// Insert or increment each submitted tag string.
pub async fn create_tags(
    State(state): State<AppState>,
    Json(request): Json<UpsertRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let processed = state.tags.upsert_many(&request.tags).await?;
    info!(processed, "tags upserted");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Tags added successfully" })),
    ))
}

/// Delete a tag by id. Unknown ids still succeed (idempotent delete).
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    info!(id, "deleting tag");
    state.tags.delete(id).await?;

    Ok(Json(json!({ "message": "Tag deleted successfully" })))
}

/// Random sample of up to 20 tags for the cloud view.
pub async fn tagcloud(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, AppError> {
    let tags = state.tags.sample().await?;
    Ok(Json(tags))
}
