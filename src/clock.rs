//! # Clock
//!
//! The only shared resource the storefront reads. Business rules that depend
//! on the time of day ask an injected [`Clock`] instead of calling
//! `chrono::Local::now()` directly, so tests can pin the instant with
//! [`FixedClock`].

use chrono::{Local, NaiveDateTime};
use std::sync::{Arc, Mutex, PoisonError};

/// Source of the current local date-time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that reports whatever instant it was last set to.
///
/// Clones share the same instant, so a test can keep one handle and move
/// time while the storefront holds another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    pub fn set(&self, instant: NaiveDateTime) {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
