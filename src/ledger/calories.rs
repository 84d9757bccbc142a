use std::sync::Arc;

use rust_decimal::Decimal;

use super::calculator::{Calculator, Tracker};
use crate::{errors::Result, time::Clock};

pub const STOP_EATING: &str = "Stop eating!";

/// Calculator whose limit is a daily calorie allowance.
#[derive(Debug, Clone)]
pub struct CaloriesCalculator {
    inner: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: Decimal) -> Self {
        Self {
            inner: Calculator::new(limit),
        }
    }

    pub fn with_clock(limit: Decimal, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
        }
    }

    /// Advice on how many calories can still be eaten today.
    pub fn calories_remained(&self) -> Result<String> {
        let remaining = self.remaining()?;
        let message = if remaining > Decimal::ZERO {
            format!(
                "You can eat something else today, but with a total calorie content of no more than {} kcal",
                remaining.normalize()
            )
        } else {
            STOP_EATING.to_string()
        };
        Ok(message)
    }
}

impl Tracker for CaloriesCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}
