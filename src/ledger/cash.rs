use std::{cmp::Ordering, sync::Arc};

use rust_decimal::Decimal;

use super::calculator::{Calculator, Tracker};
use crate::{
    currency::{format_cash, CashRates, Currency},
    errors::Result,
    time::Clock,
};

pub const NO_MONEY: &str = "No money left, hang in there";

/// Calculator whose limit is a daily cash allowance in the base currency.
#[derive(Debug, Clone)]
pub struct CashCalculator {
    inner: Calculator,
    rates: CashRates,
}

impl CashCalculator {
    pub fn new(limit: Decimal) -> Self {
        Self::with_rates(limit, CashRates::default())
    }

    pub fn with_rates(limit: Decimal, rates: CashRates) -> Self {
        Self {
            inner: Calculator::new(limit),
            rates,
        }
    }

    pub fn with_clock(limit: Decimal, rates: CashRates, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
            rates,
        }
    }

    pub fn rates(&self) -> &CashRates {
        &self.rates
    }

    /// Today's remaining cash in the currency named by `code` (`usd`, `eur` or `rub`).
    pub fn today_cash_remained(&self, code: &str) -> Result<String> {
        self.today_cash_remained_with(code, &self.rates)
    }

    /// Like [`CashCalculator::today_cash_remained`] with `rates` in place of the configured ones.
    pub fn today_cash_remained_with(&self, code: &str, rates: &CashRates) -> Result<String> {
        let currency: Currency = code.parse()?;
        self.render(currency, rates)
    }

    pub fn today_cash_remained_in(&self, currency: Currency) -> Result<String> {
        self.render(currency, &self.rates)
    }

    fn render(&self, currency: Currency, rates: &CashRates) -> Result<String> {
        let converted = rates.convert(self.remaining()?, currency)?;
        tracing::debug!(currency = currency.code(), %converted, "cash remaining computed");
        let message = match converted.cmp(&Decimal::ZERO) {
            Ordering::Greater => format!("Left for today: {}", format_cash(converted, currency)),
            Ordering::Equal => NO_MONEY.to_string(),
            Ordering::Less => format!(
                "{NO_MONEY}: your debt is {}",
                format_cash(converted.abs(), currency)
            ),
        };
        Ok(message)
    }
}

impl Tracker for CashCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}
