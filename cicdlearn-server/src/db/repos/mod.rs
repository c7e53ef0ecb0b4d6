//! Repository traits and their store-backed implementations
//!
//! Handlers only see the traits, so the HTTP layer can be driven
//! without a live database. Each method issues exactly one statement.

pub mod events;
pub mod items;

use async_trait::async_trait;

use super::StoreError;
use crate::models::{Event, Item};

pub use events::{MongoEventRepo, EVENTS_LIST_LIMIT};
pub use items::PgItemRepo;

/// Relational item storage.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, ascending by id.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Insert one item and return it with its assigned id.
    async fn create(&self, name: &str) -> Result<Item, StoreError>;
}

/// Document event storage.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Newest events first, at most [`EVENTS_LIST_LIMIT`].
    async fn list_recent(&self) -> Result<Vec<Event>, StoreError>;

    /// Insert one `{message}` document and return it with its assigned id.
    async fn create(&self, message: &str) -> Result<Event, StoreError>;
}
