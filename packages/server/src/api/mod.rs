use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use tagcloud_tags::TagStore;

pub mod health;
pub mod tags_handlers;

/// Shared state injected into every API handler.
#[derive(Clone)]
pub struct AppState {
    pub tags: Arc<TagStore>,
}

/// Creates the application router: the tag API plus the static site.
/// Any path the API does not claim is served from `static_dir`, with
/// index.html standing in for unknown routes (single-page-app fallback).
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");
    let static_site = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/test-db", get(health::test_db))
        .route("/api/tags", get(tags_handlers::list_tags))
        .route("/api/tags", post(tags_handlers::create_tags))
        .route("/api/tags/{id}", delete(tags_handlers::delete_tag))
        .route("/api/tagcloud", get(tags_handlers::tagcloud))
        .fallback_service(static_site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
