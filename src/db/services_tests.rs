#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use crate::db::repositories::LocalRepository;
    use crate::db::repository::DocumentRepository;
    use crate::db::services::{
        create_document, health_check, list_collection_names, DIAGNOSTIC_COLLECTION_LIMIT,
    };
    use crate::schemas::ContactRequest;

    fn contact() -> ContactRequest {
        ContactRequest {
            name: "Jo Lee".to_string(),
            email: "jo@example.com".to_string(),
            market_region: None,
            interest: "Press".to_string(),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_create_document_returns_a_24_char_identifier() {
        let repo = LocalRepository::new();
        let id = create_document(&repo, &contact()).await.unwrap();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_created_document_is_visible_in_its_collection() {
        let repo = LocalRepository::new();
        create_document(&repo, &contact()).await.unwrap();

        let stored = repo.documents("contactrequest");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].get_str("name").unwrap(), "Jo Lee");
        assert_eq!(stored[0].get_str("email").unwrap(), "jo@example.com");
        assert_eq!(stored[0].get_str("interest").unwrap(), "Press");
    }

    #[tokio::test]
    async fn test_resubmission_is_not_idempotent() {
        let repo = LocalRepository::new();
        let first = create_document(&repo, &contact()).await.unwrap();
        let second = create_document(&repo, &contact()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.documents("contactrequest").len(), 2);
    }

    #[tokio::test]
    async fn test_collection_listing_is_bounded() {
        let repo = LocalRepository::new();
        for i in 0..DIAGNOSTIC_COLLECTION_LIMIT + 2 {
            repo.insert_document(&format!("collection_{:02}", i), doc! {})
                .await
                .unwrap();
        }

        let names = list_collection_names(&repo).await.unwrap();
        assert_eq!(names.len(), DIAGNOSTIC_COLLECTION_LIMIT);
    }

    #[tokio::test]
    async fn test_health_check_reports_a_reachable_store() {
        let repo = LocalRepository::new();
        assert!(health_check(&repo).await.is_ok());
    }
}
