//! Error types for the storefront.

use crate::collaborators::CollaboratorError;
use thiserror::Error;

/// Faults surfaced by storefront operations.
///
/// Business outcomes (declined payment, bad email, no shipping route) are
/// ordinary return values and never show up here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    /// A collaborator failed. Passed through as-is.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// The rate provider returned a rate that would yield a negative or
    /// non-finite price.
    #[error("Invalid exchange rate for {currency}: {rate}")]
    InvalidRate { currency: String, rate: f64 },
}
