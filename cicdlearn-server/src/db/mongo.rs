//! MongoDB client construction
//!
//! The driver manages its own connection pool and connects lazily, so
//! building the handle never touches the network beyond SRV lookups.

use mongodb::{Client, Database};

use crate::config::Settings;

/// Collection holding event documents.
pub const EVENTS_COLLECTION: &str = "events";

/// Build a client from `settings` and return the configured database.
pub async fn connect_mongo(settings: &Settings) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&settings.mongo_url).await?;
    tracing::debug!(db = %settings.mongo_db, "MongoDB client ready");
    Ok(client.database(&settings.mongo_db))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handle_uses_configured_database() {
        let settings = Settings::from_lookup(|name| match name {
            "APP_MONGO_DB" => Some("events_test".to_string()),
            _ => None,
        })
        .unwrap();

        // No server needed: the driver defers connecting until first use
        let db = connect_mongo(&settings).await.expect("client construction");
        assert_eq!(db.name(), "events_test");
    }

    #[tokio::test]
    async fn rejects_unparseable_url() {
        let settings = Settings {
            postgres_url: "postgres://localhost/app".into(),
            mongo_url: "mongodb://localhost:notaport".into(),
            mongo_db: "app".into(),
        };
        assert!(connect_mongo(&settings).await.is_err());
    }
}
