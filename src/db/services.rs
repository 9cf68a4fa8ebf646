//! High-level persistence operations.
//!
//! These free functions are the typed surface over [`DocumentRepository`]:
//! callers hand them a schema value and the entity → collection mapping is
//! resolved statically from [`DocumentSchema`].

use mongodb::bson;
use serde::Serialize;

use super::repository::{
    DocumentRepository, DocumentSchema, ErrorContext, RepositoryError, RepositoryResult,
};

/// Diagnostic listings report at most this many collection names.
pub const DIAGNOSTIC_COLLECTION_LIMIT: usize = 10;

/// Serialize `record` and insert it into its collection, returning the
/// store-assigned identifier.
///
/// Exactly one durable write; the caller holds no copy of the stored
/// document afterwards. There is no retry on failure.
pub async fn create_document<T>(
    repo: &dyn DocumentRepository,
    record: &T,
) -> RepositoryResult<String>
where
    T: DocumentSchema + Serialize,
{
    let document = bson::to_document(record).map_err(|e| {
        RepositoryError::serialization_with_context(
            e.to_string(),
            ErrorContext::new("create_document").with_collection(T::COLLECTION),
        )
    })?;
    repo.insert_document(T::COLLECTION, document).await
}

/// List collection names known to the store, bounded to the first
/// [`DIAGNOSTIC_COLLECTION_LIMIT`]. Read-only.
pub async fn list_collection_names(
    repo: &dyn DocumentRepository,
) -> RepositoryResult<Vec<String>> {
    let mut names = repo.list_collection_names().await?;
    names.truncate(DIAGNOSTIC_COLLECTION_LIMIT);
    Ok(names)
}

/// Verify the store is reachable.
pub async fn health_check(repo: &dyn DocumentRepository) -> RepositoryResult<()> {
    repo.ping().await
}
