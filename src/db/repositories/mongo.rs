//! MongoDB repository implementation.

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Database};

use crate::db::config::MongoConfig;
use crate::db::repository::{
    DocumentRepository, ErrorContext, RepositoryError, RepositoryResult,
};

/// Document repository backed by MongoDB.
///
/// Holds the one client for the process lifetime. The driver opens
/// connections on first use and pools them internally, so a single
/// `MongoRepository` is shared across all requests without locking.
pub struct MongoRepository {
    database: Database,
}

impl MongoRepository {
    /// Build a repository from the connection configuration.
    ///
    /// No I/O happens here beyond parsing the connection string; the driver
    /// dials the store lazily on the first operation.
    ///
    /// # Errors
    /// Returns a connection error if the connection string is malformed.
    pub async fn connect(config: &MongoConfig) -> RepositoryResult<Self> {
        let client = Client::with_uri_str(&config.uri).await.map_err(|e| {
            RepositoryError::connection_with_context(e.to_string(), ErrorContext::new("connect"))
        })?;
        tracing::info!(database = %config.database, "MongoDB client initialized");
        Ok(Self {
            database: client.database(&config.database),
        })
    }
}

#[async_trait]
impl DocumentRepository for MongoRepository {
    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> RepositoryResult<String> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| {
                RepositoryError::write_with_context(
                    e.to_string(),
                    ErrorContext::new("insert_document").with_collection(collection),
                )
            })?;
        Ok(render_inserted_id(result.inserted_id))
    }

    async fn list_collection_names(&self) -> RepositoryResult<Vec<String>> {
        self.database.list_collection_names().await.map_err(|e| {
            RepositoryError::query_with_context(
                e.to_string(),
                ErrorContext::new("list_collection_names"),
            )
        })
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                RepositoryError::connection_with_context(e.to_string(), ErrorContext::new("ping"))
            })?;
        Ok(())
    }

    fn database_name(&self) -> &str {
        self.database.name()
    }
}

/// Render the store-assigned `_id` as a string.
///
/// ObjectIds become their 24-char hex form. Mongo also permits
/// caller-supplied `_id` values of other BSON types, which fall back to
/// their string rendering so the gateway stays total.
fn render_inserted_id(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_object_ids_render_as_24_char_hex() {
        let rendered = render_inserted_id(Bson::ObjectId(ObjectId::new()));
        assert_eq!(rendered.len(), 24);
        assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_non_object_ids_fall_back_to_string_rendering() {
        assert_eq!(render_inserted_id(Bson::Int64(7)), "7");
    }
}
