//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::DocumentRepository;
use crate::notify::NotificationSender;

/// Shared application state passed to all handlers.
///
/// Owned by the composition root; handlers receive it by extraction, so
/// there is no module-level singleton to reach around.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn DocumentRepository>,
    /// Notification capability invoked on new contact requests
    pub notifier: Arc<dyn NotificationSender>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        notifier: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}
