//! # Mock Collaborators
//!
//! Programmable stand-ins for testing the storefront without real services.
//!
//! A [`MockCollaborator`] holds a queue of expected calls and records every
//! request it receives. Each call pops the next expectation and returns its
//! response; a call with nothing queued panics. After the test,
//! [`MockCollaborator::verify`] checks that every expectation was used.
//!
//! ```ignore
//! let charger = MockPaymentCharger::new("payments");
//! charger.expect_call().return_ok(ChargeReceipt::new("success"));
//!
//! // hand `charger.client()` to the storefront, run the operation...
//!
//! assert_eq!(charger.calls()[0].1, 100.0);
//! charger.verify();
//! ```

use crate::collaborators::{
    AnalyticsTracker, CollaboratorError, Notifier, PaymentCharger, RateProvider,
    SecurityCodeGenerator, ShippingQuoteProvider,
};
use crate::model::{ChargeReceipt, PaymentCredentials, SecurityCode, ShippingQuote};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

pub type MockRateProvider = MockCollaborator<String, f64>;
pub type MockShippingQuoteProvider = MockCollaborator<String, Option<ShippingQuote>>;
pub type MockPaymentCharger = MockCollaborator<(PaymentCredentials, f64), ChargeReceipt>;
/// Records `(recipient, message)` pairs.
pub type MockNotifier = MockCollaborator<(String, String), ()>;
pub type MockAnalyticsTracker = MockCollaborator<String, ()>;
pub type MockSecurityCodeGenerator = MockCollaborator<(), SecurityCode>;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A mock collaborator with expectation tracking for fluent testing.
///
/// Clones share the same queue and call log.
pub struct MockCollaborator<Req, Resp> {
    name: &'static str,
    expectations: Arc<Mutex<VecDeque<Result<Resp, CollaboratorError>>>>,
    calls: Arc<Mutex<Vec<Req>>>,
}

impl<Req, Resp> Clone for MockCollaborator<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            expectations: self.expectations.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<Req: Clone, Resp> MockCollaborator<Req, Resp> {
    /// Creates a mock with no expectations. `name` shows up in panic messages.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a shared handle suitable for [`Collaborators`](crate::collaborators::Collaborators).
    pub fn client(&self) -> Arc<Self> {
        Arc::new(self.clone())
    }

    /// Queues the response for the next call.
    pub fn expect_call(&self) -> ExpectationBuilder<Resp> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<Req> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!(
                "Not all expectations on `{}` were met. {} remaining",
                self.name, remaining
            );
        }
    }

    fn respond(&self, request: Req) -> Result<Resp, CollaboratorError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let next = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(response) => response,
            None => panic!("Unexpected call to `{}`: no expectation queued", self.name),
        }
    }
}

/// Builder returned by [`MockCollaborator::expect_call`].
pub struct ExpectationBuilder<Resp> {
    expectations: Arc<Mutex<VecDeque<Result<Resp, CollaboratorError>>>>,
}

impl<Resp> ExpectationBuilder<Resp> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Resp) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CollaboratorError) {
        self.push(Err(error));
    }

    /// Queues the same successful response `times` times.
    pub fn return_ok_times(self, value: Resp, times: usize)
    where
        Resp: Clone,
    {
        let mut exps = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        exps.extend((0..times).map(|_| Ok(value.clone())));
    }

    fn push(self, response: Result<Resp, CollaboratorError>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }
}

// =============================================================================
// COLLABORATOR BINDINGS
// =============================================================================

#[async_trait]
impl RateProvider for MockRateProvider {
    async fn exchange_rate(&self, currency: &str) -> Result<f64, CollaboratorError> {
        self.respond(currency.to_string())
    }
}

#[async_trait]
impl ShippingQuoteProvider for MockShippingQuoteProvider {
    async fn shipping_quote(
        &self,
        destination: &str,
    ) -> Result<Option<ShippingQuote>, CollaboratorError> {
        self.respond(destination.to_string())
    }
}

#[async_trait]
impl PaymentCharger for MockPaymentCharger {
    async fn charge(
        &self,
        credentials: &PaymentCredentials,
        amount: f64,
    ) -> Result<ChargeReceipt, CollaboratorError> {
        self.respond((credentials.clone(), amount))
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_email(&self, to: &str, message: &str) -> Result<(), CollaboratorError> {
        self.respond((to.to_string(), message.to_string()))
    }
}

#[async_trait]
impl AnalyticsTracker for MockAnalyticsTracker {
    async fn track_page_view(&self, path: &str) -> Result<(), CollaboratorError> {
        self.respond(path.to_string())
    }
}

/// Code generation cannot fail, so a queued error panics.
impl SecurityCodeGenerator for MockSecurityCodeGenerator {
    fn generate_code(&self) -> SecurityCode {
        match self.respond(()) {
            Ok(code) => code,
            Err(e) => panic!("`{}` cannot return an error: {e}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_queued_responses_in_order() {
        let rates = MockRateProvider::new("rates");
        rates.expect_call().return_ok(60.0);
        rates
            .expect_call()
            .return_err(CollaboratorError::Unavailable("down".to_string()));

        let client = rates.client();
        assert_eq!(client.exchange_rate("IRT").await, Ok(60.0));
        assert_eq!(
            client.exchange_rate("EUR").await,
            Err(CollaboratorError::Unavailable("down".to_string()))
        );

        assert_eq!(rates.calls(), vec!["IRT".to_string(), "EUR".to_string()]);
        rates.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected call to `notifier`")]
    async fn test_mock_panics_on_unexpected_call() {
        let notifier = MockNotifier::new("notifier");
        let _ = notifier.send_email("a@b", "hi").await;
    }

    #[test]
    #[should_panic(expected = "1 remaining")]
    fn test_verify_panics_on_leftover_expectations() {
        let analytics = MockAnalyticsTracker::new("analytics");
        analytics.expect_call().return_ok(());
        analytics.verify();
    }

    #[tokio::test]
    async fn test_return_ok_times() {
        let notifier = MockNotifier::new("notifier");
        notifier.expect_call().return_ok_times((), 2);

        notifier.send_email("a@b", "one").await.unwrap();
        notifier.send_email("c@d", "two").await.unwrap();

        assert_eq!(notifier.call_count(), 2);
        notifier.verify();
    }
}
