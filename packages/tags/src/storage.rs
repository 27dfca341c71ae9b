// ABOUTME: Tag storage operations
// ABOUTME: List, upsert-many, delete-by-id, and random sample over the store adapter

use tracing::debug;

use crate::error::StoreError;
use crate::store::{Param, Store};
use crate::types::Tag;

/// Maximum number of rows returned by [`TagStore::sample`].
pub const SAMPLE_LIMIT: i64 = 20;

/// Storage layer for tag operations.
pub struct TagStore {
    store: Store,
}

impl TagStore {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Access the underlying store adapter (liveness probe, schema).
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// All tag rows, in whatever order the database returns them.
    pub async fn list(&self) -> Result<Vec<Tag>, StoreError> {
        self.store
            .query("SELECT id, tag, count FROM tags", &[])
            .await
    }

    /// Insert each tag string with count 1, or increment the existing
    /// row's count when the string is already present. Each string is a
    /// single insert-or-increment statement arbitrated by the unique
    /// constraint, so concurrent submissions cannot create duplicates.
    /// The batch is sequential and not transactional: a failure partway
    /// leaves earlier strings applied.
    pub async fn upsert_many(&self, tags: &[String]) -> Result<usize, StoreError> {
        for tag in tags {
            self.store
                .execute(
                    "INSERT INTO tags (tag, count) VALUES ($1, 1) \
                     ON CONFLICT (tag) DO UPDATE SET count = tags.count + 1",
                    &[Param::Text(tag)],
                )
                .await?;
        }
        debug!(count = tags.len(), "tags upserted");
        Ok(tags.len())
    }

    /// Delete the tag with the given id. Deleting an absent id is not
    /// an error.
    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let affected = self
            .store
            .execute("DELETE FROM tags WHERE id = $1", &[Param::Int(id.into())])
            .await?;
        debug!(id, affected, "tag deleted");
        Ok(())
    }

    /// Up to [`SAMPLE_LIMIT`] rows chosen pseudo-randomly, for the
    /// tag-cloud view. No ordering guarantee across calls.
    pub async fn sample(&self) -> Result<Vec<Tag>, StoreError> {
        self.store
            .query(
                "SELECT id, tag, count FROM tags ORDER BY RANDOM() LIMIT $1",
                &[Param::Int(SAMPLE_LIMIT)],
            )
            .await
    }
}
