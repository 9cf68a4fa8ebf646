//! Contact notification capability.
//!
//! A submission is meant to notify an operator address, but delivery is
//! deliberately unimplemented. [`NoopNotifier`] records the intent at debug
//! level and performs no network I/O; a real sender (Postmark, SES, ...)
//! can be substituted behind [`NotificationSender`] without touching the
//! handlers.

use async_trait::async_trait;

use crate::schemas::ContactRequest;

/// Default operator address when `NOTIFY_EMAIL` is not set.
const DEFAULT_RECIPIENT: &str = "hello@grandecharte.com";

/// Error raised by a notification backend.
#[derive(Debug, thiserror::Error)]
#[error("Notification error: {0}")]
pub struct NotifyError(pub String);

/// Capability to notify an operator about a new contact request.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn notify_contact(&self, contact: &ContactRequest) -> Result<(), NotifyError>;
}

/// No-op notification sender.
pub struct NoopNotifier {
    recipient: String,
}

impl NoopNotifier {
    /// Create a notifier addressed to `recipient`.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    /// Build from `NOTIFY_EMAIL`, falling back to the default operator
    /// address.
    pub fn from_env() -> Self {
        Self::new(std::env::var("NOTIFY_EMAIL").unwrap_or_else(|_| DEFAULT_RECIPIENT.to_string()))
    }
}

#[async_trait]
impl NotificationSender for NoopNotifier {
    async fn notify_contact(&self, contact: &ContactRequest) -> Result<(), NotifyError> {
        tracing::debug!(
            recipient = %self.recipient,
            contact_email = %contact.email,
            "contact notification skipped: no delivery backend configured"
        );
        Ok(())
    }
}
