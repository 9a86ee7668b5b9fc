use crate::clock::{Clock, SystemClock};
use crate::collaborators::{
    Collaborators, FlatRateShipping, RandomCodeGenerator, StaticRateTable, ThresholdCharger,
    TracingAnalytics, TracingNotifier,
};
use crate::config::{ConfigError, StorefrontConfig};
use crate::model::ShippingQuote;
use crate::storefront::Storefront;
use std::sync::Arc;
use tracing::info;

/// Largest charge the in-memory payment charger approves.
pub const IN_MEMORY_CHARGE_LIMIT: f64 = 1_000.0;

/// A storefront wired to self-contained, in-process collaborators.
///
/// `StorefrontSystem` is responsible for:
/// - **Dependency Wiring**: building every collaborator and handing them to the [`Storefront`]
/// - **Configuration**: validating the [`StorefrontConfig`] the storefront runs with
///
/// The in-memory collaborators never leave the process: emails and page
/// views go to the log, rates and shipping routes come from fixed tables,
/// and charges above [`IN_MEMORY_CHARGE_LIMIT`] are declined.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::in_memory(StorefrontConfig::from_env())?;
/// let info = system.storefront.shipping_info("Tehran").await?;
/// ```
pub struct StorefrontSystem {
    pub storefront: Storefront,
    pub config: StorefrontConfig,
}

impl StorefrontSystem {
    /// In-memory system reading the wall clock.
    pub fn in_memory(config: StorefrontConfig) -> Result<Self, ConfigError> {
        Self::in_memory_with_clock(config, Arc::new(SystemClock))
    }

    /// In-memory system reading `clock`.
    pub fn in_memory_with_clock(
        config: StorefrontConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let storefront = Storefront::new(in_memory_collaborators(), clock, &config)?;
        info!(
            open_hour = config.open_hour,
            close_hour = config.close_hour,
            "Storefront ready"
        );

        Ok(Self { storefront, config })
    }
}

/// The collaborator set behind [`StorefrontSystem::in_memory`].
pub fn in_memory_collaborators() -> Collaborators {
    let rates = StaticRateTable::new()
        .with_rate("USD", 1.0)
        .with_rate("EUR", 0.92)
        .with_rate("GBP", 0.79)
        .with_rate("IRT", 60.0);

    let shipping = FlatRateShipping::new()
        .with_route("Tehran", ShippingQuote::new(100.0, 2))
        .with_route("London", ShippingQuote::new(25.5, 5))
        .with_route("Berlin", ShippingQuote::new(15.0, 1));

    Collaborators {
        rates: Arc::new(rates),
        shipping: Arc::new(shipping),
        payments: Arc::new(ThresholdCharger::new(IN_MEMORY_CHARGE_LIMIT)),
        notifier: Arc::new(TracingNotifier),
        analytics: Arc::new(TracingAnalytics),
        security: Arc::new(RandomCodeGenerator),
    }
}
