//! Router configuration for the HTTP API.
//!
//! Sets up the three routes and the middleware stack (CORS, tracing).

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Wildcard-with-credentials CORS policy carried over from the original
    // deployment: any origin, any method, any header, credentials allowed.
    // tower-http rejects a literal `*` combined with credentials, so the
    // layer mirrors whatever the request asked for, which is what a
    // wildcard-with-credentials configuration emits on the wire.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::diagnostics))
        .route("/contact", post(handlers::submit_contact))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::db::LocalRepository;
    use crate::notify::NoopNotifier;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(LocalRepository::new()),
            Arc::new(NoopNotifier::new("ops@example.com")),
        )
    }

    #[tokio::test]
    async fn test_router_serves_the_root_status_message() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Grande Charte Backend Running");
    }

    #[tokio::test]
    async fn test_contact_with_missing_fields_is_a_client_error() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name": "Jo Lee", "email": "jo@example.com"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_unknown_routes_are_not_found() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
