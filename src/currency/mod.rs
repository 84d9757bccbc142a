use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};

/// Default number of roubles per US dollar.
pub const USD_RATE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
/// Default number of roubles per euro.
pub const EURO_RATE: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// Decimal places shown for cash amounts.
pub const CASH_PRECISION: u32 = 2;

/// Currencies a cash budget can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    /// Lowercase code accepted by [`Currency::from_str`].
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Rub => "rub",
        }
    }

    /// Label appended to rendered amounts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "Euro",
            Self::Rub => "руб",
        }
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "usd" => Ok(Self::Usd),
            "eur" => Ok(Self::Eur),
            "rub" => Ok(Self::Rub),
            _ => {
                tracing::warn!(code, "rejected unsupported currency");
                Err(TrackerError::UnsupportedCurrency(code.to_string()))
            }
        }
    }
}

/// Exchange rates used to convert a rouble-denominated cash budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CashRates {
    #[serde(default = "CashRates::default_usd")]
    pub usd: Decimal,
    #[serde(default = "CashRates::default_eur")]
    pub eur: Decimal,
}

impl Default for CashRates {
    fn default() -> Self {
        Self {
            usd: USD_RATE,
            eur: EURO_RATE,
        }
    }
}

impl CashRates {
    pub fn new(usd: Decimal, eur: Decimal) -> Self {
        Self { usd, eur }
    }

    pub fn default_usd() -> Decimal {
        USD_RATE
    }

    pub fn default_eur() -> Decimal {
        EURO_RATE
    }

    /// Returns the amount of base units one unit of `currency` is worth.
    pub fn divisor(&self, currency: Currency) -> Result<Decimal> {
        let rate = match currency {
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
            Currency::Rub => Decimal::ONE,
        };
        if rate <= Decimal::ZERO {
            tracing::warn!(currency = currency.code(), %rate, "rejected non-positive rate");
            return Err(TrackerError::InvalidRate {
                currency: currency.code().to_string(),
                rate,
            });
        }
        Ok(rate)
    }

    /// Converts a base-currency amount into `currency`.
    pub fn convert(&self, amount: Decimal, currency: Currency) -> Result<Decimal> {
        amount
            .checked_div(self.divisor(currency)?)
            .ok_or_else(|| TrackerError::Overflow(format!("conversion to {}", currency.code())))
    }
}

/// Rounds a cash amount to [`CASH_PRECISION`] places, ties to even.
pub fn round_cash(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CASH_PRECISION, RoundingStrategy::MidpointNearestEven)
}

/// Renders a cash amount with exactly two decimals followed by the currency label.
pub fn format_cash(amount: Decimal, currency: Currency) -> String {
    format!(
        "{:.prec$} {}",
        round_cash(amount),
        currency.label(),
        prec = CASH_PRECISION as usize
    )
}
