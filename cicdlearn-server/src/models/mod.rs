//! Domain models shared by the repositories and the HTTP layer

pub mod event;
pub mod item;

pub use event::{Event, EventId};
pub use item::Item;
