#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Checkout Recipe
//!
//! > **A Recipe for thin orchestration over external services in Rust.**
//!
//! This crate shows how to write a checkout/account layer that coordinates
//! several independent services (currency rates, shipping quotes, payments,
//! email, analytics, one-time codes) without owning any of them.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Collaborators behind traits
//!
//! Every external service is a trait with one method. The [`Storefront`](storefront::Storefront)
//! only holds `Arc<dyn Trait>` handles, so it never knows whether it is
//! talking to a payment gateway, an in-memory table, or a test mock.
//!
//! ### Outcomes are values
//!
//! A declined payment, a malformed email and a missing shipping route are
//! all expected outcomes, and they come back as ordinary return values:
//! - declined payment → [`OrderResult::Failure`](model::OrderResult::Failure)
//! - bad email → `Ok(false)` from `sign_up`
//! - no route → the `"Shipping Unavailable"` sentinel
//!
//! Only a collaborator that actually fails produces an `Err`, and it is
//! passed through unchanged.
//!
//! ### Time is a dependency
//!
//! Store hours and the seasonal discount read an injected [`Clock`](clock::Clock).
//! Tests pin it with [`FixedClock`](clock::FixedClock).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Orchestrator ([`storefront`])
//! - **Role**: Sequences collaborator calls and maps their results.
//! - **Key items**: [`Storefront`](storefront::Storefront), [`StorefrontError`](storefront::StorefrontError),
//!   [`calculate_discount`](storefront::calculate_discount).
//!
//! ### 2. The Contracts ([`collaborators`])
//! - **Role**: One trait per external service, plus simple in-memory bindings.
//! - **Key items**: [`PaymentCharger`](collaborators::PaymentCharger), [`Notifier`](collaborators::Notifier),
//!   [`Collaborators`](collaborators::Collaborators).
//!
//! ### 3. The Values ([`model`])
//! - **Role**: Plain data passed across the boundary.
//! - **Key items**: [`Cart`](model::Cart), [`PaymentCredentials`](model::PaymentCredentials),
//!   [`OrderResult`](model::OrderResult), [`Email`](model::Email).
//!
//! ### 4. The Wiring ([`lifecycle`], [`config`], [`clock`])
//! - **Role**: Configuration, tracing setup and a ready-made in-memory system.
//! - **Key items**: [`StorefrontSystem`](lifecycle::StorefrontSystem), [`StorefrontConfig`](config::StorefrontConfig).
//!
//! ### 5. Testing ([`mock`])
//! Expectation-queue mocks for every collaborator. See the [`mock`] module.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clock;
pub mod collaborators;
pub mod config;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod storefront;
