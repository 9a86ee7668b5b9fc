//! Coupon codes and price reduction.

use serde::Serialize;
use thiserror::Error;

/// Inputs [`calculate_discount`] refuses to price.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CouponError {
    #[error("Invalid price")]
    InvalidPrice,

    #[error("Invalid discount code")]
    InvalidCode,
}

/// A coupon code and the fraction it takes off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coupon {
    pub code: &'static str,
    pub discount: f64,
}

const COUPONS: &[Coupon] = &[
    Coupon {
        code: "SAVE10",
        discount: 0.1,
    },
    Coupon {
        code: "SAVE20",
        discount: 0.2,
    },
];

/// The active coupon table.
pub fn coupons() -> &'static [Coupon] {
    COUPONS
}

/// Applies `code` to `price`. Unknown codes leave the price unchanged.
pub fn calculate_discount(price: f64, code: &str) -> Result<f64, CouponError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CouponError::InvalidPrice);
    }
    if code.trim().is_empty() {
        return Err(CouponError::InvalidCode);
    }

    let discount = COUPONS
        .iter()
        .find(|coupon| coupon.code == code)
        .map_or(0.0, |coupon| coupon.discount);

    Ok(price * (1.0 - discount))
}
