//! Startup schema bootstrap for the `items` table

use sqlx::PgPool;

/// DDL run once at startup. Safe to repeat.
pub const CREATE_ITEMS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS items (id SERIAL PRIMARY KEY, name TEXT NOT NULL)";

/// Ensure the `items` table exists.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring items table exists...");

    sqlx::query(CREATE_ITEMS_TABLE).execute(pool).await?;

    tracing::debug!("Schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let settings = Settings::from_env().expect("settings");
        let pool = create_pool(&settings).await.expect("pool creation failed");

        ensure_schema(&pool).await.expect("first run");
        ensure_schema(&pool).await.expect("second run");

        let (exists,): (bool,) =
            sqlx::query_as("SELECT to_regclass('public.items') IS NOT NULL")
                .fetch_one(&pool)
                .await
                .expect("query failed");
        assert!(exists);
        pool.close().await;
    }
}
