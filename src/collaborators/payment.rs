use crate::collaborators::CollaboratorError;
use crate::model::{ChargeReceipt, ChargeStatus, PaymentCredentials};
use async_trait::async_trait;
use tracing::{info, instrument, warn};

/// Charges a payment method.
///
/// A declined charge is a normal `Ok` receipt with a non-success status.
/// `Err` is reserved for the charger itself failing.
#[async_trait]
pub trait PaymentCharger: Send + Sync {
    async fn charge(
        &self,
        credentials: &PaymentCredentials,
        amount: f64,
    ) -> Result<ChargeReceipt, CollaboratorError>;
}

/// Approves any charge up to `limit` and declines everything above it.
#[derive(Debug, Clone)]
pub struct ThresholdCharger {
    limit: f64,
}

impl ThresholdCharger {
    pub fn new(limit: f64) -> Self {
        Self { limit }
    }
}

#[async_trait]
impl PaymentCharger for ThresholdCharger {
    #[instrument(skip(self, credentials))]
    async fn charge(
        &self,
        credentials: &PaymentCredentials,
        amount: f64,
    ) -> Result<ChargeReceipt, CollaboratorError> {
        if credentials.as_value().is_null() {
            return Err(CollaboratorError::Rejected("missing payment credentials".to_string()));
        }

        if amount <= self.limit {
            info!("Charge approved");
            Ok(ChargeReceipt::new(ChargeStatus::Success))
        } else {
            warn!(limit = self.limit, "Charge declined");
            Ok(ChargeReceipt::new(ChargeStatus::Failed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_threshold_charger() {
        let charger = ThresholdCharger::new(500.0);
        let creds = PaymentCredentials::new(json!({ "creditCardNumber": "123456" }));

        assert!(charger.charge(&creds, 500.0).await.unwrap().status.is_success());
        assert_eq!(
            charger.charge(&creds, 500.01).await.unwrap().status,
            ChargeStatus::Failed
        );
    }

    #[tokio::test]
    async fn test_threshold_charger_rejects_missing_credentials() {
        let charger = ThresholdCharger::new(500.0);
        let result = charger.charge(&PaymentCredentials::new(json!(null)), 10.0).await;
        assert!(matches!(result, Err(CollaboratorError::Rejected(_))));
    }
}
