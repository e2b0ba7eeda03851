//! Inclusive date ranges
//!
//! [`Period`] is the textual `{start, end}` pair callers hand in, and
//! [`DatePeriod`] is the same range once both ends have been parsed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::datetime::{parse_instant, parse_schedule_date, Instant};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A closed interval `[start, end]` between two instants.
///
/// `start <= end` is assumed, not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatePeriod {
    pub start: Instant,
    pub end: Instant,
}

impl DatePeriod {
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    /// Whether `instant` lies within the period, both ends included
    pub fn contains(&self, instant: &Instant) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// Inclusive count of days: `floor((end - start) / day) + 1`
    ///
    /// A reversed period gives zero or a negative count.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_milliseconds().div_euclid(MILLIS_PER_DAY) + 1
    }

    /// Calendar dates from the start date through the end date
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end.date_naive();
        self.start.date_naive().iter_days().take_while(move |d| *d <= end)
    }
}

/// A `{start, end}` pair of unparsed date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

impl Period {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parse both ends with [`parse_instant`]
    pub fn resolve(&self) -> Result<DatePeriod> {
        Ok(DatePeriod::new(parse_instant(&self.start)?, parse_instant(&self.end)?))
    }

    /// Parse both ends as calendar dates in `format`
    pub fn resolve_dates(&self, format: &str) -> Result<(NaiveDate, NaiveDate)> {
        Ok((parse_schedule_date(&self.start, format)?, parse_schedule_date(&self.end, format)?))
    }
}
