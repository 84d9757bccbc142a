use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{record::Record, window::DateWindow};
use crate::{
    errors::{Result, TrackerError},
    time::{Clock, SystemClock},
};

/// Daily limit plus the append-only list of records counted against it.
#[derive(Clone)]
pub struct Calculator {
    limit: Decimal,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl Calculator {
    pub fn new(limit: Decimal) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: Decimal, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(
            amount = %record.amount(),
            date = %record.date(),
            comment = record.comment(),
            "record added"
        );
        self.records.push(record);
    }

    /// Sum of the amounts dated inside `window`.
    pub fn stats_in(&self, window: DateWindow) -> Result<Decimal> {
        self.records
            .iter()
            .filter(|record| window.contains(record.date()))
            .try_fold(Decimal::ZERO, |total, record| {
                total
                    .checked_add(record.amount())
                    .ok_or_else(|| TrackerError::Overflow("sum of record amounts".into()))
            })
    }

    pub fn today_stats(&self) -> Result<Decimal> {
        self.stats_in(DateWindow::day(self.today()))
    }

    pub fn week_stats(&self) -> Result<Decimal> {
        self.stats_in(DateWindow::trailing_week(self.today()))
    }

    /// What is left of the limit after today's records.
    pub fn remaining(&self) -> Result<Decimal> {
        self.limit
            .checked_sub(self.today_stats()?)
            .ok_or_else(|| TrackerError::Overflow("limit minus today's total".into()))
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .field("today", &self.today())
            .finish()
    }
}

/// Record and statistics surface shared by the calculator specializations.
///
/// Implementors only expose the [`Calculator`] they wrap; the operations are
/// provided here and must not be overridden.
pub trait Tracker {
    fn calculator(&self) -> &Calculator;

    fn calculator_mut(&mut self) -> &mut Calculator;

    fn limit(&self) -> Decimal {
        self.calculator().limit()
    }

    fn records(&self) -> &[Record] {
        self.calculator().records()
    }

    fn add_record(&mut self, record: Record) {
        self.calculator_mut().add_record(record);
    }

    fn today_stats(&self) -> Result<Decimal> {
        self.calculator().today_stats()
    }

    fn week_stats(&self) -> Result<Decimal> {
        self.calculator().week_stats()
    }

    fn remaining(&self) -> Result<Decimal> {
        self.calculator().remaining()
    }
}
