use chrono::{Duration, NaiveDate};

use crate::errors::{Result, TrackerError};

/// Number of calendar days covered by the trailing week window.
pub const WEEK_DAYS: i64 = 7;

/// Half-open `[start, end)` range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(TrackerError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window covering only `date`.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date + Duration::days(1),
        }
    }

    /// The seven days ending with `today`, inclusive.
    pub fn trailing_week(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(WEEK_DAYS - 1),
            end: today + Duration::days(1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
