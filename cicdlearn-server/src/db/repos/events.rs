//! Event repository
//!
//! - list_recent: `_id` descending, capped at 100
//! - create: single insert_one of `{message}`

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use super::EventStore;
use crate::db::mongo::EVENTS_COLLECTION;
use crate::db::StoreError;
use crate::models::{Event, EventId};

/// Maximum number of events returned by a list.
pub const EVENTS_LIST_LIMIT: i64 = 100;

/// Event repository over the configured MongoDB database.
#[derive(Clone)]
pub struct MongoEventRepo {
    collection: Collection<Document>,
}

impl MongoEventRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(EVENTS_COLLECTION),
        }
    }
}

#[async_trait]
impl EventStore for MongoEventRepo {
    async fn list_recent(&self) -> Result<Vec<Event>, StoreError> {
        let docs: Vec<Document> = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .limit(EVENTS_LIST_LIMIT)
            .await?
            .try_collect()
            .await?;

        Ok(docs.iter().map(Event::from_document).collect())
    }

    async fn create(&self, message: &str) -> Result<Event, StoreError> {
        let result = self
            .collection
            .insert_one(doc! { "message": message })
            .await?;

        Ok(Event {
            id: EventId::from_bson(&result.inserted_id),
            message: message.to_owned(),
        })
    }
}
