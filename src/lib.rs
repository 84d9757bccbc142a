#![doc(test(attr(deny(warnings))))]

//! Daily Tally tracks dated amounts against a daily limit and reports what is
//! left for today, either as calories or as cash in a chosen currency.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod time;
pub mod utils;

pub use errors::{Result, TrackerError};
pub use ledger::{
    CaloriesCalculator, CashCalculator, Calculator, DateWindow, Record, Tracker,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Daily Tally tracing initialized.");
    });
}
