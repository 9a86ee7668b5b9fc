//! Business constants for the storefront.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Rejected configuration values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid store hours: open {open}, close {close} (need open < close <= 24)")]
    InvalidHours { open: u32, close: u32 },

    #[error("Invalid discount date: month {month}, day {day}")]
    InvalidDiscountDate { month: u32, day: u32 },

    #[error("Invalid discount rate: {0} (need 0 <= rate < 1)")]
    InvalidDiscountRate(f64),
}

/// Configuration for the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// First hour (inclusive) the store is online.
    pub open_hour: u32,

    /// Hour (exclusive) the store goes offline.
    pub close_hour: u32,

    pub discount_month: u32,
    pub discount_day: u32,

    /// Fraction taken off on the discount day.
    pub discount_rate: f64,

    /// Prefix used when rendering prices for display.
    pub currency_symbol: String,

    /// Path reported to analytics when the home page renders.
    pub home_path: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            open_hour: 8,
            close_hour: 20,
            discount_month: 12,
            discount_day: 25,
            discount_rate: 0.2,
            currency_symbol: "$".to_string(),
            home_path: "/home".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Creates a config from defaults plus environment overrides.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_OPEN_HOUR`, `STOREFRONT_CLOSE_HOUR`
    /// - `STOREFRONT_DISCOUNT_MONTH`, `STOREFRONT_DISCOUNT_DAY`, `STOREFRONT_DISCOUNT_RATE`
    /// - `STOREFRONT_CURRENCY_SYMBOL`
    /// - `STOREFRONT_HOME_PATH`
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        override_parsed(&lookup, "STOREFRONT_OPEN_HOUR", &mut config.open_hour);
        override_parsed(&lookup, "STOREFRONT_CLOSE_HOUR", &mut config.close_hour);
        override_parsed(&lookup, "STOREFRONT_DISCOUNT_MONTH", &mut config.discount_month);
        override_parsed(&lookup, "STOREFRONT_DISCOUNT_DAY", &mut config.discount_day);
        override_parsed(&lookup, "STOREFRONT_DISCOUNT_RATE", &mut config.discount_rate);

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }
        if let Some(path) = lookup("STOREFRONT_HOME_PATH") {
            config.home_path = path;
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.open_hour >= self.close_hour || self.close_hour > 24 {
            return Err(ConfigError::InvalidHours {
                open: self.open_hour,
                close: self.close_hour,
            });
        }

        // 2000 is a leap year, so Feb 29 is accepted.
        if NaiveDate::from_ymd_opt(2000, self.discount_month, self.discount_day).is_none() {
            return Err(ConfigError::InvalidDiscountDate {
                month: self.discount_month,
                day: self.discount_day,
            });
        }

        if !(0.0..1.0).contains(&self.discount_rate) {
            return Err(ConfigError::InvalidDiscountRate(self.discount_rate));
        }

        Ok(())
    }
}

fn override_parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut T,
) {
    if let Some(raw) = lookup(key) {
        match raw.parse::<T>() {
            Ok(value) => *target = value,
            Err(_) => warn!(key, value = %raw, "Ignoring unparseable config override"),
        }
    }
}

/// Builder for [`StorefrontConfig`].
#[derive(Debug, Clone, Default)]
pub struct StorefrontConfigBuilder {
    config: StorefrontConfig,
}

impl StorefrontConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_hours(mut self, open_hour: u32, close_hour: u32) -> Self {
        self.config.open_hour = open_hour;
        self.config.close_hour = close_hour;
        self
    }

    pub fn discount_day(mut self, month: u32, day: u32) -> Self {
        self.config.discount_month = month;
        self.config.discount_day = day;
        self
    }

    pub fn discount_rate(mut self, rate: f64) -> Self {
        self.config.discount_rate = rate;
        self
    }

    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.currency_symbol = symbol.into();
        self
    }

    pub fn home_path(mut self, path: impl Into<String>) -> Self {
        self.config.home_path = path.into();
        self
    }

    pub fn build(self) -> StorefrontConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert_eq!(config.open_hour, 8);
        assert_eq!(config.close_hour, 20);
        assert_eq!((config.discount_month, config.discount_day), (12, 25));
        assert_eq!(config.discount_rate, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides_and_ignores_garbage() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("STOREFRONT_OPEN_HOUR", "9"),
            ("STOREFRONT_CLOSE_HOUR", "late"),
            ("STOREFRONT_CURRENCY_SYMBOL", "€"),
        ]);
        let config = StorefrontConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.open_hour, 9);
        assert_eq!(config.close_hour, 20);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.home_path, "/home");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = StorefrontConfig::builder().store_hours(20, 8).build();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidHours { open: 20, close: 8 })
        );

        let config = StorefrontConfig::builder().store_hours(0, 25).build();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHours { .. })));

        let config = StorefrontConfig::builder().discount_day(2, 30).build();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDiscountDate { .. })
        ));

        let config = StorefrontConfig::builder().discount_day(2, 29).build();
        assert!(config.validate().is_ok());

        let config = StorefrontConfig::builder().discount_rate(1.0).build();
        assert_eq!(config.validate(), Err(ConfigError::InvalidDiscountRate(1.0)));
    }
}
