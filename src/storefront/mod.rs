//! The orchestration layer.
//!
//! [`Storefront`] holds no state of its own beyond configuration and
//! `Arc` handles to its collaborators. Each operation awaits its
//! collaborators one after another and maps what they return onto a
//! caller-facing value. Only collaborator faults come back as `Err`.

pub mod coupon;
pub mod discount;
pub mod error;
pub mod hours;

pub use coupon::{calculate_discount, coupons, Coupon, CouponError};
pub use discount::SeasonalDiscount;
pub use error::*;
pub use hours::StoreHours;

use crate::clock::Clock;
use crate::collaborators::Collaborators;
use crate::config::{ConfigError, StorefrontConfig};
use crate::model::{Cart, Email, Money, OrderResult, PaymentCredentials, ShippingQuote};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Returned by [`Storefront::shipping_info`] when no route exists.
pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";

/// Body of the email sent on successful signup.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

/// Content returned by [`Storefront::render_page`].
pub const HOME_PAGE_CONTENT: &str = "<div>content</div>";

/// Checkout and account workflows over a set of external collaborators.
///
/// Cheap to clone. Clones share collaborators and the clock.
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(collaborators, Arc::new(SystemClock), &StorefrontConfig::default())?;
///
/// let result = storefront.submit_order(&Cart::new(100.0), &credentials).await?;
/// if storefront.sign_up("alice@example.com").await? {
///     storefront.login("alice@example.com").await?;
/// }
/// ```
#[derive(Clone)]
pub struct Storefront {
    collaborators: Collaborators,
    clock: Arc<dyn Clock>,
    hours: StoreHours,
    seasonal: SeasonalDiscount,
    currency_symbol: String,
    home_path: String,
}

impl Storefront {
    /// Builds a storefront after validating `config`.
    pub fn new(
        collaborators: Collaborators,
        clock: Arc<dyn Clock>,
        config: &StorefrontConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            collaborators,
            clock,
            hours: StoreHours::new(config.open_hour, config.close_hour),
            seasonal: SeasonalDiscount::new(
                config.discount_month,
                config.discount_day,
                config.discount_rate,
            ),
            currency_symbol: config.currency_symbol.clone(),
            home_path: config.home_path.clone(),
        })
    }

    /// Converts `amount` into `currency` using the rate provider.
    #[instrument(skip(self))]
    pub async fn price_in_currency(&self, amount: f64, currency: &str) -> Result<Money, StorefrontError> {
        let rate = self.collaborators.rates.exchange_rate(currency).await?;
        if !rate.is_finite() || rate < 0.0 {
            warn!(rate, "Rate provider returned an unusable rate");
            return Err(StorefrontError::InvalidRate {
                currency: currency.to_string(),
                rate,
            });
        }

        let converted = Money::new(amount * rate, currency);
        debug!(rate, %converted, "Converted price");
        Ok(converted)
    }

    /// Describes shipping to `destination`, or [`SHIPPING_UNAVAILABLE`].
    #[instrument(skip(self))]
    pub async fn shipping_info(&self, destination: &str) -> Result<String, StorefrontError> {
        match self.collaborators.shipping.shipping_quote(destination).await? {
            Some(quote) => {
                debug!(?quote, "Quote received");
                Ok(self.describe_quote(&quote))
            }
            None => {
                info!("No shipping route");
                Ok(SHIPPING_UNAVAILABLE.to_string())
            }
        }
    }

    fn describe_quote(&self, quote: &ShippingQuote) -> String {
        let unit = if quote.estimated_days == 1 { "day" } else { "days" };
        format!(
            "Shipping Cost: {}{} ({} {})",
            self.currency_symbol, quote.cost, quote.estimated_days, unit
        )
    }

    /// Records a home page view and returns the page content.
    ///
    /// A tracker failure is logged and otherwise ignored.
    #[instrument(skip(self))]
    pub async fn render_page(&self) -> String {
        if let Err(e) = self
            .collaborators
            .analytics
            .track_page_view(&self.home_path)
            .await
        {
            warn!(error = %e, path = %self.home_path, "Page view not recorded");
        }
        HOME_PAGE_CONTENT.to_string()
    }

    /// Charges the cart total and reports the business outcome.
    #[instrument(skip(self, cart, credentials), fields(total = cart.total_amount))]
    pub async fn submit_order(
        &self,
        cart: &Cart,
        credentials: &PaymentCredentials,
    ) -> Result<OrderResult, StorefrontError> {
        info!("Charging cart");
        let receipt = self
            .collaborators
            .payments
            .charge(credentials, cart.total_amount)
            .await?;

        if receipt.status.is_success() {
            info!("Payment succeeded");
            Ok(OrderResult::Success)
        } else {
            warn!(status = %receipt.status, "Payment not completed");
            Ok(OrderResult::failure(format!(
                "payment_error: charge returned status '{}'",
                receipt.status
            )))
        }
    }

    /// Sends a welcome email if `email` is well-formed.
    ///
    /// Returns `Ok(false)` without contacting anyone when it is not.
    #[instrument(skip(self))]
    pub async fn sign_up(&self, email: &str) -> Result<bool, StorefrontError> {
        let email = match Email::parse(email) {
            Ok(email) => email,
            Err(e) => {
                info!(reason = %e, "Signup rejected");
                return Ok(false);
            }
        };

        self.collaborators
            .notifier
            .send_email(email.as_str(), WELCOME_MESSAGE)
            .await?;
        info!("Welcome email sent");
        Ok(true)
    }

    /// Emails a fresh one-time code to `email`.
    #[instrument(skip(self))]
    pub async fn login(&self, email: &str) -> Result<(), StorefrontError> {
        let code = self.collaborators.security.generate_code();
        self.collaborators
            .notifier
            .send_email(email, code.as_str())
            .await?;
        info!("Login code sent");
        Ok(())
    }

    /// Whether the store is within opening hours right now.
    pub fn is_online(&self) -> bool {
        self.hours.is_open_at(self.clock.now())
    }

    /// The seasonal discount rate in effect today, or `0.0`.
    pub fn discount(&self) -> f64 {
        self.seasonal.rate_at(self.clock.now())
    }
}
