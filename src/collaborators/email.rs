use crate::collaborators::CollaboratorError;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Delivers an email message to a recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_email(&self, to: &str, message: &str) -> Result<(), CollaboratorError>;
}

/// Writes every message to the log instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    #[instrument(skip(self, message))]
    async fn send_email(&self, to: &str, message: &str) -> Result<(), CollaboratorError> {
        info!(bytes = message.len(), "Email dispatched");
        Ok(())
    }
}
