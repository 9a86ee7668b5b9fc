//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter with
//! `RUST_LOG`-driven filtering. Every storefront operation runs inside an
//! `#[instrument]` span, so a checkout reads as one hierarchical trace.
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run
//!
//! # Entry payloads and collaborator calls
//! RUST_LOG=debug cargo run
//!
//! # Just the orchestration layer
//! RUST_LOG=checkout_recipe::storefront=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a successful checkout followed by a signup looks like:
//!
//! ```text
//! INFO submit_order{total=120.0}: Charging cart
//! INFO submit_order{total=120.0}:charge{amount=120.0}: Charge approved
//! INFO submit_order{total=120.0}: Payment succeeded
//! INFO sign_up{email="alice@example.com"}:send_email{to="alice@example.com"}: Email dispatched bytes=15
//! INFO sign_up{email="alice@example.com"}: Welcome email sent
//! ```
//!
//! Payment credentials are skipped by every span and their `Debug` output is
//! redacted.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
