//! Error type shared by all collaborator contracts.

use thiserror::Error;

/// Failures reported by an external collaborator.
///
/// The storefront never inspects these. It hands them back to the caller
/// unchanged inside [`StorefrontError`](crate::storefront::StorefrontError).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CollaboratorError {
    /// The collaborator could not be reached or has no answer for the input.
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    /// The collaborator refused the request outright.
    #[error("Collaborator rejected request: {0}")]
    Rejected(String),

    #[error("Collaborator error: {0}")]
    Custom(String),
}

impl From<String> for CollaboratorError {
    fn from(msg: String) -> Self {
        CollaboratorError::Custom(msg)
    }
}
