use serde::{Deserialize, Serialize};
use std::fmt;

/// The minimal cart record checkout needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub total_amount: f64,
}

impl Cart {
    pub fn new(total_amount: f64) -> Self {
        Self { total_amount }
    }
}

/// Payment details forwarded verbatim to the [`PaymentCharger`](crate::collaborators::PaymentCharger).
///
/// The storefront never looks inside. `Debug` is redacted so credentials
/// never end up in log output.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentCredentials(serde_json::Value);

impl PaymentCredentials {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl fmt::Debug for PaymentCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PaymentCredentials(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = PaymentCredentials::new(json!({ "creditCardNumber": "123456" }));
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("123456"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn test_credentials_serialize_transparently() {
        let value = json!({ "creditCardNumber": "123456" });
        let creds = PaymentCredentials::new(value.clone());
        assert_eq!(serde_json::to_value(&creds).unwrap(), value);
        assert_eq!(creds.into_inner(), value);
    }
}
