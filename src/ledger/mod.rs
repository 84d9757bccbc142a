//! Records, the base calculator and its calorie and cash specializations.

pub mod calculator;
pub mod calories;
pub mod cash;
pub mod record;
pub mod window;

pub use calculator::{Calculator, Tracker};
pub use calories::{CaloriesCalculator, STOP_EATING};
pub use cash::{CashCalculator, NO_MONEY};
pub use record::{Record, RECORD_DATE_FORMAT};
pub use window::{DateWindow, WEEK_DAYS};
