//! HTTP handlers for the backend API.
//!
//! Each handler is a one-shot request/response mapping onto a single
//! service-layer operation; no state crosses requests beyond the injected
//! repository handle.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use super::dto::{ContactAccepted, DiagnosticsResponse, RootResponse};
use super::error::{truncate_message, AppError};
use super::state::AppState;
use crate::db;
use crate::schemas::{ContactForm, ContactRequest};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Probe errors surface at most this many characters inside `/test`.
const PROBE_DETAIL_LIMIT: usize = 50;

// =============================================================================
// Root
// =============================================================================

/// GET /
///
/// Fixed status message; never touches the store.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Grande Charte Backend Running".to_string(),
    })
}

// =============================================================================
// Store Diagnostics
// =============================================================================

/// GET /test
///
/// Store-reachability diagnostic. Probe failures are captured into the
/// response body as status strings; this route always answers 200.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse::not_connected();

    match db::health_check(state.repository.as_ref()).await {
        Ok(()) => {
            response.database = "✅ Available".to_string();
            match db::list_collection_names(state.repository.as_ref()).await {
                Ok(collections) => {
                    response.collections = collections;
                    response.database = "✅ Connected & Working".to_string();
                    response.connection_status = "Connected".to_string();
                    response.database_name = state.repository.database_name().to_string();
                }
                Err(e) => {
                    response.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_message(&e.to_string(), PROBE_DETAIL_LIMIT)
                    );
                }
            }
        }
        Err(e) => {
            response.database = format!(
                "❌ Error: {}",
                truncate_message(&e.to_string(), PROBE_DETAIL_LIMIT)
            );
        }
    }

    response.database_url = env_presence("DATABASE_URL");
    if response.connection_status != "Connected" {
        response.database_name = env_presence("DATABASE_NAME");
    }

    Json(response)
}

/// "✅ Set" / "❌ Not Set" marker for an environment variable.
fn env_presence(name: &str) -> String {
    if std::env::var(name).is_ok() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

// =============================================================================
// Contact Submission
// =============================================================================

/// POST /contact
///
/// Validate the payload, persist it as a contact request document, and hand
/// it to the notification stub. Returns the store-assigned identifier.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> HandlerResult<ContactAccepted> {
    form.validate()?;

    let contact = ContactRequest::from(form);
    let id = db::create_document(state.repository.as_ref(), &contact).await?;

    // Delivery is a designed-in no-op; a failure here must not fail a
    // submission that was already persisted.
    if let Err(e) = state.notifier.notify_contact(&contact).await {
        tracing::warn!("contact notification failed: {}", e);
    }

    Ok(Json(ContactAccepted {
        status: "ok".to_string(),
        id,
    }))
}
