//! Repository abstraction for the document store.
//!
//! [`DocumentRepository`] is the object-safe boundary the rest of the crate
//! talks to. It stays string-and-document shaped so it can be held as
//! `Arc<dyn DocumentRepository>`; the typed surface over it lives in
//! [`crate::db::services`], which resolves collections from
//! [`DocumentSchema`] instead of from strings at call sites.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use mongodb::bson::Document;

/// A persistable entity type, bound to its document-store collection.
pub trait DocumentSchema {
    /// Collection the entity is stored in (the lowercase type name).
    const COLLECTION: &'static str;
}

/// Object-safe boundary to the document store.
///
/// One durable write per [`insert_document`] call; there are no retries and
/// no compensating logic. Implementations must be safe for concurrent use by
/// many requests sharing one handle.
///
/// [`insert_document`]: DocumentRepository::insert_document
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Insert a document into `collection` and return the store-assigned
    /// identifier as a string.
    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> RepositoryResult<String>;

    /// List the collection names known to the store. Read-only.
    async fn list_collection_names(&self) -> RepositoryResult<Vec<String>>;

    /// Verify the store is reachable.
    async fn ping(&self) -> RepositoryResult<()>;

    /// Name of the underlying database.
    fn database_name(&self) -> &str;
}
