//! PostgreSQL round-trip check

use async_trait::async_trait;
use sqlx::PgPool;

use papo_core::traits::{RepoResult, StoreHealth};

use super::error::map_db_error;

/// Pings the pool with `SELECT 1`
#[derive(Clone)]
pub struct PgStoreHealth {
    pool: PgPool,
}

impl PgStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PgStoreHealth {
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
