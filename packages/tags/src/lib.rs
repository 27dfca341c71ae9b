// ABOUTME: Tag domain package for the tagcloud backend
// ABOUTME: Provides types, the PostgreSQL store adapter, and tag operations

pub mod error;
pub mod storage;
pub mod store;
pub mod types;

// Re-export main types
pub use error::StoreError;
pub use storage::TagStore;
pub use store::{Store, StoreConfig};
pub use types::{Tag, UpsertRequest};
