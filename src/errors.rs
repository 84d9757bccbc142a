use std::result::Result as StdResult;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error type shared by records, calculators and configuration.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid date `{input}`, expected DD.MM.YYYY: {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Invalid {currency} rate: {rate}")]
    InvalidRate { currency: String, rate: Decimal },
    #[error("Invalid window: end {end} must be after start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
    #[error("Arithmetic overflow in {0}")]
    Overflow(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Config(err.to_string())
    }
}
