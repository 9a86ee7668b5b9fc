use chrono::{NaiveDateTime, Timelike};

/// Daily opening window `[open_hour, close_hour)` in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreHours {
    open_hour: u32,
    close_hour: u32,
}

impl StoreHours {
    pub fn new(open_hour: u32, close_hour: u32) -> Self {
        Self {
            open_hour,
            close_hour,
        }
    }

    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        (self.open_hour..self.close_hour).contains(&at.hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_open_hour_is_inclusive_close_hour_exclusive() {
        let hours = StoreHours::new(8, 20);

        assert!(!hours.is_open_at(at(7, 59)));
        assert!(hours.is_open_at(at(8, 0)));
        assert!(hours.is_open_at(at(19, 59)));
        assert!(!hours.is_open_at(at(20, 0)));
        assert!(!hours.is_open_at(at(20, 1)));
        assert!(!hours.is_open_at(at(23, 59)));
        assert!(!hours.is_open_at(at(0, 0)));
    }
}
