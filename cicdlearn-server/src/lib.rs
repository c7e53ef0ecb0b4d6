//! cicdlearn-server: HTTP API over two independent stores
//!
//! - Items live in PostgreSQL (`items` table, bootstrapped on startup)
//! - Events live in MongoDB (`events` collection, schemaless)
//!
//! The library owns the service lifecycle: settings are read once,
//! the pool is opened and the schema ensured before serving, and the
//! pool is closed after the server drains.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, Settings};
pub use http::{build_router, AppState, Service, ServerConfig};
