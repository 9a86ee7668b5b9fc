use chrono::{Datelike, NaiveDateTime};

/// A fixed discount that applies on one calendar day every year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalDiscount {
    month: u32,
    day: u32,
    rate: f64,
}

impl SeasonalDiscount {
    pub fn new(month: u32, day: u32, rate: f64) -> Self {
        Self { month, day, rate }
    }

    /// The discount rate at `at`. Only the date matters.
    pub fn rate_at(&self, at: NaiveDateTime) -> f64 {
        if at.month() == self.month && at.day() == self.day {
            self.rate
        } else {
            0.0
        }
    }
}
