use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Entity;

/// Source of per-entity row counts.
#[async_trait]
pub trait EntityCounter: Send + Sync {
    /// Counts the rows of `entity`. `None` means the aggregate came back null.
    async fn count_rows(&self, entity: Entity) -> Result<Option<i64>, sqlx::Error>;
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityCounter for Database {
    async fn count_rows(&self, entity: Entity) -> Result<Option<i64>, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(entity.count_query())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
