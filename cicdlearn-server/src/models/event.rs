//! Event documents from the `events` collection
//!
//! MongoDB assigns `_id` on insert. The HTTP layer only ever sees the
//! string rendering of that value, so [`EventId`] keeps it opaque.

use std::fmt;

use mongodb::bson::{Bson, Document};
use serde::Serialize;

/// Opaque store-assigned event identifier.
///
/// Rendering rules:
/// - ObjectId: 24-char lowercase hex
/// - String: verbatim
/// - anything else: the BSON display form
///
/// No ordering or format is implied by the rendered string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn from_bson(value: &Bson) -> Self {
        match value {
            Bson::ObjectId(oid) => Self(oid.to_hex()),
            Bson::String(s) => Self(s.clone()),
            other => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub message: String,
}

impl Event {
    /// Build an event from a stored document.
    ///
    /// Documents written outside this API may lack `message`; those
    /// read as an empty string. A document without `_id` gets an
    /// empty id, which the store never produces itself.
    pub fn from_document(doc: &Document) -> Self {
        let id = doc
            .get("_id")
            .map(EventId::from_bson)
            .unwrap_or_else(|| EventId(String::new()));

        let message = match doc.get("message") {
            None | Some(Bson::Null) => String::new(),
            Some(Bson::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        Self { id, message }
    }
}
