use crate::collaborators::CollaboratorError;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Looks up conversion rates from the store's base currency.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn exchange_rate(&self, currency: &str) -> Result<f64, CollaboratorError>;
}

/// Fixed in-memory rate table. Currency codes are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StaticRateTable {
    rates: HashMap<String, f64>,
}

impl StaticRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, currency: &str, rate: f64) -> Self {
        self.rates.insert(currency.to_ascii_uppercase(), rate);
        self
    }
}

#[async_trait]
impl RateProvider for StaticRateTable {
    #[instrument(skip(self))]
    async fn exchange_rate(&self, currency: &str) -> Result<f64, CollaboratorError> {
        debug!("Looking up rate");
        self.rates
            .get(&currency.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| CollaboratorError::Unavailable(format!("no rate for {currency}")))
    }
}
