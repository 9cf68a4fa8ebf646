//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

/// Response for the root status route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Response for a successful contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAccepted {
    /// Always "ok"
    pub status: String,
    /// Store-assigned identifier of the created document
    pub id: String,
}

/// Response body for the store diagnostics route.
///
/// Probe failures are rendered into the status strings; the route itself
/// always answers 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    /// Backend process status
    pub backend: String,
    /// Store status, including any probe error (truncated)
    pub database: String,
    /// Whether the connection string is configured
    pub database_url: String,
    /// Database name when connected, otherwise configuration presence
    pub database_name: String,
    /// "Connected" or "Not Connected"
    pub connection_status: String,
    /// Up to 10 known collection names
    pub collections: Vec<String>,
}

impl DiagnosticsResponse {
    /// Initial state before any probe has run.
    pub fn not_connected() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: "❌ Not Set".to_string(),
            database_name: "❌ Not Set".to_string(),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}
