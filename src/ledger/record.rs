use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    errors::{Result, TrackerError},
    time::{Clock, SystemClock},
};

/// Textual date format accepted by [`Record::new`].
pub const RECORD_DATE_FORMAT: &str = "%d.%m.%Y";

/// One dated amount with a free-form comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    amount: Decimal,
    date: NaiveDate,
    comment: String,
}

impl Record {
    /// Builds a record dated `date` (`DD.MM.YYYY`), or today when `date` is absent or empty.
    pub fn new(
        amount: Decimal,
        comment: impl Into<String>,
        date: Option<&str>,
    ) -> Result<Self> {
        Self::with_clock(amount, comment, date, &SystemClock)
    }

    /// Same as [`Record::new`] but reads "today" from `clock`.
    pub fn with_clock(
        amount: Decimal,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self> {
        let date = match date.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => parse_date(raw)?,
            None => clock.today(),
        };
        Ok(Self::on(amount, comment, date))
    }

    pub fn on(amount: Decimal, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            date,
            comment: comment.into(),
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Whole days between this record and `today`; negative for future records.
    pub fn days_before(&self, today: NaiveDate) -> i64 {
        (today - self.date).num_days()
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, RECORD_DATE_FORMAT).map_err(|source| TrackerError::DateParse {
        input: raw.to_string(),
        source,
    })
}
