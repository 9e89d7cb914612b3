//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::entities::Mapping;
use crate::domain::error::{StoreError, StoreResult};
use crate::domain::repositories::UrlRepository;

/// Connection pool settings for [`PgUrlRepository::connect`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// PostgreSQL repository over the `urls` table.
///
/// Every statement runs in its own autocommit transaction; concurrency is
/// left to the pool and the database engine.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a repository over an existing pool.
    ///
    /// The `urls` table must already exist; see [`Self::connect`].
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a pool, applies the embedded migrations (creating `urls` if it
    /// is absent) and returns the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or the migration fails.
    pub async fn connect(database_url: &str, settings: &PoolSettings) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .max_lifetime(settings.max_lifetime)
            .connect(database_url)
            .await?;
        info!("Connected to database");

        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!("Migrations applied");

        Ok(Self::new(Arc::new(pool)))
    }

    /// Returns the underlying pool.
    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, mapping: &Mapping) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (short_code, original_url)
            VALUES ($1, $2)
            ON CONFLICT (short_code) DO NOTHING
            "#,
        )
        .bind(mapping.code.as_str())
        .bind(&mapping.original_url)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| StoreError::Write(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Collision(mapping.code.to_string()));
        }

        Ok(())
    }

    async fn find(&self, code: &str) -> StoreResult<Option<String>> {
        let url: Option<Option<String>> =
            sqlx::query_scalar("SELECT original_url FROM urls WHERE short_code = $1")
                .bind(code)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(|e| StoreError::Read(e.to_string()))?;

        Ok(url.flatten())
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
