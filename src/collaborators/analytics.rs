use crate::collaborators::CollaboratorError;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Records page views. Callers do not wait on the outcome beyond logging it.
#[async_trait]
pub trait AnalyticsTracker: Send + Sync {
    async fn track_page_view(&self, path: &str) -> Result<(), CollaboratorError>;
}

/// Emits one log line per page view.
#[derive(Debug, Clone, Default)]
pub struct TracingAnalytics;

#[async_trait]
impl AnalyticsTracker for TracingAnalytics {
    #[instrument(skip(self))]
    async fn track_page_view(&self, path: &str) -> Result<(), CollaboratorError> {
        info!("Page view");
        Ok(())
    }
}
