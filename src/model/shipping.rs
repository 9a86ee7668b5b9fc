use serde::{Deserialize, Serialize};

/// A shipping quote for one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

impl ShippingQuote {
    pub fn new(cost: f64, estimated_days: u32) -> Self {
        Self {
            cost,
            estimated_days,
        }
    }
}
