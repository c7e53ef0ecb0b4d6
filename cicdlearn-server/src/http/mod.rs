//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (credentials allowed)
//! - Request tracing
//! - Graceful shutdown that closes the Postgres pool
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, AppState, ServerConfig, ServerError, Service, StartupError};
