//! In-memory repository for unit testing and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use parking_lot::RwLock;

use crate::db::repository::{DocumentRepository, RepositoryResult};

/// In-memory document repository.
///
/// Assigns fresh ObjectId identifiers and keeps documents grouped by
/// collection name. Used by the test suite and as the fallback backend when
/// no store is configured.
#[derive(Default)]
pub struct LocalRepository {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the documents currently held in `collection`.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentRepository for LocalRepository {
    async fn insert_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> RepositoryResult<String> {
        let id = ObjectId::new();
        document.insert("_id", id);
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id.to_hex())
    }

    async fn list_collection_names(&self) -> RepositoryResult<Vec<String>> {
        // Sorted for deterministic diagnostics output.
        let mut names: Vec<String> = self.collections.read().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }

    fn database_name(&self) -> &str {
        "local"
    }
}
