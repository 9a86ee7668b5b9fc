//! Runtime wiring and observability setup.
//!
//! # Main Components
//!
//! - [`StorefrontSystem`] - Builds a storefront over in-memory collaborators
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod storefront_system;
pub mod tracing;

pub use storefront_system::*;
pub use self::tracing::setup_tracing;
