use async_trait::async_trait;

use crate::NotificationEmail;

/// Transactional email capability the contact handler dispatches through.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one email and returns the provider-issued message id, if the
    /// provider issues one.
    async fn send(&self, email: &NotificationEmail) -> anyhow::Result<Option<String>>;
}
