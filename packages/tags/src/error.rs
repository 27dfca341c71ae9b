use thiserror::Error;

/// Failures surfaced by the store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be reached or the pool produced no
    /// connection in time.
    #[error("database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// The statement itself failed: syntax error, constraint violation,
    /// type mismatch.
    #[error("query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_)
    )
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if is_connection_error(&err) {
            StoreError::ConnectionFailed(err)
        } else {
            StoreError::QueryFailed(err)
        }
    }
}
