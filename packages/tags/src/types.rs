// ABOUTME: Tag type definitions
// ABOUTME: Row and request structures shared by the store and the API

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single tag row. `tag` is unique; `count` tracks how many times the
/// same string has been submitted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i32,
    pub tag: String,
    pub count: i32,
}

/// Body of `POST /api/tags`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRequest {
    pub tags: Vec<String>,
}
