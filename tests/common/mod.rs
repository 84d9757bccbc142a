#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use daily_tally::time::{Clock, FixedClock};

/// Date every test treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 20).expect("valid date")
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(today()))
}
