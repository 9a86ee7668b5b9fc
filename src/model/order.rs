//! Payment outcomes and the caller-facing order result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported by the payment charger.
///
/// Only `"success"` and `"failed"` are part of the contract. Anything else is
/// kept verbatim in [`ChargeStatus::Other`] so it can be logged, and it is
/// never treated as a success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChargeStatus {
    Success,
    Failed,
    Other(String),
}

impl ChargeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ChargeStatus::Success => "success",
            ChargeStatus::Failed => "failed",
            ChargeStatus::Other(raw) => raw,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ChargeStatus::Success)
    }
}

impl From<&str> for ChargeStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "success" => ChargeStatus::Success,
            "failed" => ChargeStatus::Failed,
            other => ChargeStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ChargeStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "success" => ChargeStatus::Success,
            "failed" => ChargeStatus::Failed,
            _ => ChargeStatus::Other(raw),
        }
    }
}

impl From<ChargeStatus> for String {
    fn from(status: ChargeStatus) -> Self {
        match status {
            ChargeStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the payment charger hands back for a single charge attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeReceipt {
    pub status: ChargeStatus,
}

impl ChargeReceipt {
    pub fn new(status: impl Into<ChargeStatus>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Outcome of [`Storefront::submit_order`](crate::storefront::Storefront::submit_order).
///
/// Serializes as `{"success": true}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "OrderResultWire", try_from = "OrderResultWire")]
pub enum OrderResult {
    Success,
    Failure { error: String },
}

impl OrderResult {
    pub fn failure(error: impl Into<String>) -> Self {
        OrderResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OrderResult::Success)
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            OrderResult::Success => None,
            OrderResult::Failure { error } => Some(error),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct OrderResultWire {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<OrderResult> for OrderResultWire {
    fn from(result: OrderResult) -> Self {
        match result {
            OrderResult::Success => OrderResultWire {
                success: true,
                error: None,
            },
            OrderResult::Failure { error } => OrderResultWire {
                success: false,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<OrderResultWire> for OrderResult {
    type Error = String;

    fn try_from(wire: OrderResultWire) -> Result<Self, Self::Error> {
        match (wire.success, wire.error) {
            (true, None) => Ok(OrderResult::Success),
            (true, Some(_)) => Err("a successful order cannot carry an error".to_string()),
            (false, Some(error)) if !error.is_empty() => Ok(OrderResult::Failure { error }),
            (false, _) => Err("a failed order must carry a non-empty error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_charge_status_parsing() {
        assert_eq!(ChargeStatus::from("success"), ChargeStatus::Success);
        assert_eq!(ChargeStatus::from("failed"), ChargeStatus::Failed);
        assert_eq!(
            ChargeStatus::from("SUCCESS"),
            ChargeStatus::Other("SUCCESS".to_string())
        );
        assert!(!ChargeStatus::from("pending").is_success());
    }

    #[test]
    fn test_charge_receipt_wire_shape() {
        let receipt: ChargeReceipt = serde_json::from_value(json!({ "status": "success" })).unwrap();
        assert_eq!(receipt.status, ChargeStatus::Success);

        let receipt: ChargeReceipt = serde_json::from_value(json!({ "status": "on_hold" })).unwrap();
        assert_eq!(receipt.status, ChargeStatus::Other("on_hold".to_string()));
        assert_eq!(serde_json::to_value(&receipt).unwrap(), json!({ "status": "on_hold" }));
    }

    #[test]
    fn test_order_result_wire_shape() {
        assert_eq!(
            serde_json::to_value(OrderResult::Success).unwrap(),
            json!({ "success": true })
        );
        assert_eq!(
            serde_json::to_value(OrderResult::failure("payment_error")).unwrap(),
            json!({ "success": false, "error": "payment_error" })
        );
    }

    #[test]
    fn test_order_result_rejects_inconsistent_wire() {
        let bad = serde_json::from_value::<OrderResult>(json!({ "success": false }));
        assert!(bad.is_err());

        let bad = serde_json::from_value::<OrderResult>(json!({ "success": true, "error": "x" }));
        assert!(bad.is_err());

        let ok = serde_json::from_value::<OrderResult>(json!({ "success": false, "error": "x" })).unwrap();
        assert_eq!(ok.error(), Some("x"));
    }
}
