//! Repeating work/off day schedules
//!
//! A schedule is a cycle of `work_days` consecutive working days followed by
//! `off_days` consecutive days off, anchored on the first day of a period.

use chrono::NaiveDate;
use log::{debug, trace};

use crate::config::FormatConfig;
use crate::constants::{LOG_SCHEDULE_GENERATED, SCHEDULE_DATE_FORMAT};
use crate::error::{DateError, Result};
use crate::period::Period;
use crate::utils::datetime::format_schedule_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSchedule {
    work_days: u32,
    off_days: u32,
    date_format: String,
}

impl WorkSchedule {
    /// Create a schedule using the `DD-MM-YYYY` date format
    ///
    /// # Errors
    /// Returns [`DateError::InvalidCycle`] when both counts are zero.
    pub fn new(work_days: u32, off_days: u32) -> Result<Self> {
        if work_days == 0 && off_days == 0 {
            return Err(DateError::InvalidCycle { work_days, off_days });
        }
        Ok(Self {
            work_days,
            off_days,
            date_format: SCHEDULE_DATE_FORMAT.to_string(),
        })
    }

    /// Create a schedule that reads and writes dates in the configured format
    pub fn from_config(work_days: u32, off_days: u32, formats: &FormatConfig) -> Result<Self> {
        Ok(Self::new(work_days, off_days)?.with_date_format(&formats.schedule_date_format))
    }

    #[must_use]
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    pub fn work_days(&self) -> u32 {
        self.work_days
    }

    pub fn off_days(&self) -> u32 {
        self.off_days
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Length of one full work + off cycle
    pub fn cycle_len(&self) -> u64 {
        u64::from(self.work_days) + u64::from(self.off_days)
    }

    /// Whether the day `offset` days after the anchor is a working day
    pub fn is_work_day(&self, offset: u64) -> bool {
        offset % self.cycle_len() < u64::from(self.work_days)
    }

    /// Working dates in `start..=end`, with `start` as day 0 of the cycle
    pub fn work_dates(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .zip(0u64..)
            .filter(|(_, offset)| self.is_work_day(*offset))
            .map(|(date, _)| date)
            .collect()
    }

    /// Render the working dates of `period`, both ends parsed with this
    /// schedule's date format
    ///
    /// # Errors
    /// Returns [`DateError::InvalidInput`] if either end does not match the format.
    pub fn generate(&self, period: &Period) -> Result<Vec<String>> {
        let (start, end) = period.resolve_dates(&self.date_format)?;
        trace!(
            "Scheduling {} on / {} off from {} to {}",
            self.work_days,
            self.off_days,
            start,
            end
        );

        let dates: Vec<String> = self
            .work_dates(start, end)
            .into_iter()
            .map(|d| format_schedule_date(d, &self.date_format))
            .collect();

        debug!("{}: {} dates between {} and {}", LOG_SCHEDULE_GENERATED, dates.len(), period.start, period.end);
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_cycle_rejected() {
        assert_eq!(
            WorkSchedule::new(0, 0),
            Err(DateError::InvalidCycle {
                work_days: 0,
                off_days: 0
            })
        );
    }

    #[test]
    fn test_is_work_day_cycle() {
        let schedule = WorkSchedule::new(2, 3).unwrap();
        let pattern: Vec<bool> = (0..7).map(|i| schedule.is_work_day(i)).collect();
        assert_eq!(pattern, vec![true, true, false, false, false, true, true]);
    }

    #[test]
    fn test_no_work_days() {
        let schedule = WorkSchedule::new(0, 2).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(schedule.work_dates(start, end).is_empty());
    }
}
