//! Item repository
//!
//! - list: full scan ordered by id (no LIMIT)
//! - create: INSERT ... RETURNING, duplicates allowed

use async_trait::async_trait;
use sqlx::PgPool;

use super::ItemStore;
use crate::db::StoreError;
use crate::models::Item;

/// Item repository over the shared pool.
///
/// Each call checks a connection out for one statement; the pool takes
/// it back when the statement finishes, whether or not it succeeded.
#[derive(Clone)]
pub struct PgItemRepo {
    pool: PgPool,
}

impl PgItemRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemRepo {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>("SELECT id, name FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn create(&self, name: &str) -> Result<Item, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }
}
