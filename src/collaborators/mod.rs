//! Contracts for the external services the storefront coordinates.
//!
//! Each collaborator is a trait with a single method. The storefront only
//! ever sees `Arc<dyn Trait>`, so production code binds real services,
//! tests bind [`mock`](crate::mock) stubs, and the demo binary binds the
//! in-memory implementations that live next to each trait.

pub mod analytics;
pub mod currency;
pub mod email;
pub mod error;
pub mod payment;
pub mod security;
pub mod shipping;

pub use analytics::*;
pub use currency::*;
pub use email::*;
pub use error::*;
pub use payment::*;
pub use security::*;
pub use shipping::*;

use std::sync::Arc;

/// Every collaborator the [`Storefront`](crate::storefront::Storefront) depends on.
#[derive(Clone)]
pub struct Collaborators {
    pub rates: Arc<dyn RateProvider>,
    pub shipping: Arc<dyn ShippingQuoteProvider>,
    pub payments: Arc<dyn PaymentCharger>,
    pub notifier: Arc<dyn Notifier>,
    pub analytics: Arc<dyn AnalyticsTracker>,
    pub security: Arc<dyn SecurityCodeGenerator>,
}
