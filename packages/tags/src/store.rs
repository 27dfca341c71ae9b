// ABOUTME: Store adapter over a bounded PostgreSQL connection pool
// ABOUTME: Owns pool construction, the liveness probe, and statement execution

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{FromRow, PgPool, Postgres};
use tracing::debug;

use crate::error::StoreError;

/// Connection settings for the tag database, sourced from the process
/// environment by the server package.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub user: String,
    pub host: String,
    pub database: String,
    pub password: String,
    pub port: u16,
    pub max_connections: u32,
}

/// A positional statement parameter (`$1`, `$2`, ...).
#[derive(Debug, Clone, Copy)]
pub enum Param<'a> {
    Text(&'a str),
    Int(i64),
}

/// Embedded schema. The table is normally provisioned externally; this
/// lets tests and fresh deployments self-provision.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tags (
    id SERIAL PRIMARY KEY,
    tag TEXT NOT NULL UNIQUE,
    count INTEGER NOT NULL DEFAULT 1 CHECK (count >= 1)
)";

/// Store adapter: a long-lived handle on the connection pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Build a lazily connecting pool from discrete credentials. The
    /// pool opens connections on first use, so an unreachable database
    /// never aborts startup.
    pub fn connect(config: &StoreConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);

        debug!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "database pool created"
        );

        Self { pool }
    }

    /// Wrap an existing pool.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Liveness probe: `SELECT NOW()` round trip.
    pub async fn probe(&self) -> Result<DateTime<Utc>, StoreError> {
        let (now,): (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(now)
    }

    /// Create the tags table when it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    /// Run a row-returning statement, collecting every row in order.
    pub async fn query<'a, T>(
        &self,
        sql: &'a str,
        params: &[Param<'a>],
    ) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<Postgres, T>(sql);
        for param in params {
            query = match *param {
                Param::Text(value) => query.bind(value),
                Param::Int(value) => query.bind(value),
            };
        }
        query.fetch_all(&self.pool).await.map_err(StoreError::from)
    }

    /// Run a statement, returning the affected row count.
    pub async fn execute<'a>(
        &self,
        sql: &'a str,
        params: &[Param<'a>],
    ) -> Result<u64, StoreError> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = match *param {
                Param::Text(value) => query.bind(value),
                Param::Int(value) => query.bind(value),
            };
        }
        let result = query.execute(&self.pool).await.map_err(StoreError::from)?;
        Ok(result.rows_affected())
    }
}
