//! Database layer - Postgres pool, MongoDB handle, repositories
//!
//! # Design Principles
//!
//! - Connection pool (min 1, max 5 connections) - no Arc<Mutex<Connection>>
//! - One statement per operation, no multi-step transactions
//! - Every store failure surfaces as `StoreError`, never retried

pub mod mongo;
pub mod pool;
pub mod repos;
pub mod schema;

pub use mongo::connect_mongo;
pub use pool::create_pool;
pub use repos::*;
pub use schema::ensure_schema;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("postgres error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
