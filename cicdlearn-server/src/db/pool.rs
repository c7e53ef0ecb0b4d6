//! Postgres connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The command timeout
//! is enforced server-side through `statement_timeout`, so it bounds query
//! execution but not the wait for a free connection.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::Settings;

/// Connections kept open even when idle.
pub const MIN_CONNECTIONS: u32 = 1;

/// Upper bound on checked-out connections. A sixth concurrent
/// acquisition queues until one is released.
pub const MAX_CONNECTIONS: u32 = 5;

/// Ceiling on a single statement's execution time.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the Postgres pool described by `settings`.
///
/// Connects eagerly, so an unreachable store fails here rather than on
/// the first request.
///
/// # Example
///
/// ```ignore
/// let settings = Settings::from_env()?;
/// let pool = create_pool(&settings).await?;
/// ```
pub async fn create_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(&settings.postgres_dsn())?;

    PgPoolOptions::new()
        .min_connections(MIN_CONNECTIONS)
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Parse a plain Postgres DSN and attach the command timeout.
pub fn connect_options(dsn: &str) -> Result<PgConnectOptions, sqlx::Error> {
    let options: PgConnectOptions = dsn.parse()?;
    Ok(options.options([(
        "statement_timeout",
        COMMAND_TIMEOUT.as_millis().to_string(),
    )]))
}
