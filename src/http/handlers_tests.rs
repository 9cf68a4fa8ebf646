#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::Json;
    use mongodb::bson::{doc, Document};
    use serde_json::json;

    use crate::db::{
        DocumentRepository, ErrorContext, LocalRepository, RepositoryError, RepositoryResult,
    };
    use crate::http::error::AppError;
    use crate::http::handlers::{diagnostics, root, submit_contact};
    use crate::http::state::AppState;
    use crate::notify::NoopNotifier;
    use crate::schemas::ContactForm;

    /// Repository double whose store is never reachable.
    struct UnreachableRepository;

    #[async_trait]
    impl DocumentRepository for UnreachableRepository {
        async fn insert_document(
            &self,
            collection: &str,
            _document: Document,
        ) -> RepositoryResult<String> {
            Err(RepositoryError::connection_with_context(
                "connection refused",
                ErrorContext::new("insert_document").with_collection(collection),
            ))
        }

        async fn list_collection_names(&self) -> RepositoryResult<Vec<String>> {
            Err(RepositoryError::connection("connection refused"))
        }

        async fn ping(&self) -> RepositoryResult<()> {
            Err(RepositoryError::connection("connection refused"))
        }

        fn database_name(&self) -> &str {
            "unreachable"
        }
    }

    fn state_with(repository: Arc<dyn DocumentRepository>) -> AppState {
        AppState::new(repository, Arc::new(NoopNotifier::new("ops@example.com")))
    }

    fn form(value: serde_json::Value) -> ContactForm {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[tokio::test]
    async fn test_root_returns_the_fixed_status_message() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Grande Charte Backend Running");
    }

    #[tokio::test]
    async fn test_valid_submission_returns_an_identifier_and_writes_one_document() {
        let repo = Arc::new(LocalRepository::new());
        let state = state_with(repo.clone());
        let payload = form(json!({
            "name": "Jo Lee",
            "email": "jo@example.com",
            "interest": "Press"
        }));

        let Json(body) = submit_contact(State(state), Json(payload)).await.unwrap();

        assert_eq!(body.status, "ok");
        assert_eq!(body.id.len(), 24);
        let stored = repo.documents("contactrequest");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].get_str("email").unwrap(), "jo@example.com");
    }

    #[tokio::test]
    async fn test_resubmission_creates_two_distinct_documents() {
        let repo = Arc::new(LocalRepository::new());
        let payload = json!({
            "name": "Jo Lee",
            "email": "jo@example.com",
            "interest": "Press"
        });

        let Json(first) = submit_contact(State(state_with(repo.clone())), Json(form(payload.clone())))
            .await
            .unwrap();
        let Json(second) = submit_contact(State(state_with(repo.clone())), Json(form(payload)))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.documents("contactrequest").len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_fields_are_rejected_and_nothing_is_written() {
        let repo = Arc::new(LocalRepository::new());
        let state = state_with(repo.clone());
        let payload = form(json!({
            "name": "J",
            "email": "bad-email",
            "interest": "Press"
        }));

        let err = submit_contact(State(state), Json(payload)).await.unwrap_err();

        let AppError::Validation(errors) = &err else {
            panic!("expected a validation error, got {:?}", err);
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert!(repo.documents("contactrequest").is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_a_server_error() {
        let state = state_with(Arc::new(UnreachableRepository));
        let payload = form(json!({
            "name": "Jo Lee",
            "email": "jo@example.com",
            "interest": "Press"
        }));

        let err = submit_contact(State(state), Json(payload)).await.unwrap_err();

        assert!(matches!(err, AppError::Repository(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_diagnostics_reports_an_unreachable_store_without_failing() {
        let state = state_with(Arc::new(UnreachableRepository));

        let Json(body) = diagnostics(State(state)).await;

        assert_eq!(body.backend, "✅ Running");
        assert!(body.database.starts_with("❌ Error:"));
        assert_eq!(body.connection_status, "Not Connected");
        assert!(body.collections.is_empty());
    }

    #[tokio::test]
    async fn test_diagnostics_lists_known_collections_when_connected() {
        let repo = Arc::new(LocalRepository::new());
        repo.insert_document("contactrequest", doc! {"name": "Jo"})
            .await
            .unwrap();
        let state = state_with(repo);

        let Json(body) = diagnostics(State(state)).await;

        assert_eq!(body.database, "✅ Connected & Working");
        assert_eq!(body.connection_status, "Connected");
        assert_eq!(body.database_name, "local");
        assert_eq!(body.collections, vec!["contactrequest".to_string()]);
    }
}
