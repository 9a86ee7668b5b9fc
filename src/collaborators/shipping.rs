use crate::collaborators::CollaboratorError;
use crate::model::ShippingQuote;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Quotes shipping for a destination. `Ok(None)` means there is no route.
#[async_trait]
pub trait ShippingQuoteProvider: Send + Sync {
    async fn shipping_quote(&self, destination: &str)
        -> Result<Option<ShippingQuote>, CollaboratorError>;
}

/// In-memory quotes keyed by destination name.
#[derive(Debug, Clone, Default)]
pub struct FlatRateShipping {
    routes: HashMap<String, ShippingQuote>,
}

impl FlatRateShipping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, destination: impl Into<String>, quote: ShippingQuote) -> Self {
        self.routes.insert(destination.into(), quote);
        self
    }
}

#[async_trait]
impl ShippingQuoteProvider for FlatRateShipping {
    #[instrument(skip(self))]
    async fn shipping_quote(
        &self,
        destination: &str,
    ) -> Result<Option<ShippingQuote>, CollaboratorError> {
        debug!("Quoting route");
        Ok(self.routes.get(destination).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route_has_no_quote() {
        let shipping = FlatRateShipping::new().with_route("Tehran", ShippingQuote::new(100.0, 2));

        assert_eq!(
            shipping.shipping_quote("Tehran").await,
            Ok(Some(ShippingQuote::new(100.0, 2)))
        );
        assert_eq!(shipping.shipping_quote("Atlantis").await, Ok(None));
    }
}
