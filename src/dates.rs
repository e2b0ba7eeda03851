//! The date helpers
//!
//! Every function here is a pure calculation over its arguments. Wall clock
//! fields are always read in UTC so results do not depend on the host's time
//! zone. Months are 1-based (January = 1) wherever a caller passes one in.
//!
//! Functions that take a date string parse it with
//! [`parse_instant`](crate::utils::datetime::parse_instant) and fail fast with
//! [`DateError::InvalidInput`](crate::error::DateError::InvalidInput) on bad input.

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::constants::{DISPLAY_FORMAT, TIME_FORMAT};
use crate::error::{DateError, Result};
use crate::period::Period;
use crate::schedule::WorkSchedule;
use crate::utils::date::{days_in_month, is_leap, is_weekend, month_days, next_weekday, quarter_of};
use crate::utils::datetime::{format_instant_with, parse_instant, weekday_name, Instant};

/// Milliseconds elapsed since 1970-01-01T00:00:00Z
///
/// ```
/// assert_eq!(datekit::date_to_timestamp("01 Jan 1970 00:00:00 UTC"), Ok(0));
/// ```
pub fn date_to_timestamp(date: &str) -> Result<i64> {
    Ok(parse_instant(date)?.timestamp_millis())
}

/// Time of day as zero-padded `hh:mm:ss` (24-hour)
pub fn get_time(date: &Instant) -> String {
    format_instant_with(date, TIME_FORMAT)
}

/// English weekday name of a date string, e.g. `"Thursday"`
pub fn get_day_name(date: &str) -> Result<&'static str> {
    Ok(weekday_name(parse_instant(date)?.weekday()))
}

/// The first Friday strictly after `date`, at the same time of day
///
/// A Friday maps to the Friday one week later.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] past the end of the representable calendar.
pub fn get_next_friday(date: &Instant) -> Result<Instant> {
    let from = date.date_naive();
    next_weekday(from, Weekday::Fri)
        .map(|friday| friday.and_time(date.time()).and_utc())
        .ok_or_else(|| DateError::OutOfRange(format!("no Friday after {from}")))
}

/// Number of days in a 1-based `month` of `year`, leap year aware
pub fn get_count_days_in_month(month: u32, year: i32) -> Result<u32> {
    days_in_month(month, year)
}

/// Inclusive number of days between two date strings
///
/// Equal dates count as one day. `start` must not be after `end`.
pub fn get_count_days_on_period(start: &str, end: &str) -> Result<i64> {
    Ok(Period::new(start, end).resolve()?.day_count())
}

/// Whether `date` falls within `period`, both ends included
pub fn is_date_in_period(date: &str, period: &Period) -> Result<bool> {
    let instant = parse_instant(date)?;
    Ok(period.resolve()?.contains(&instant))
}

/// Format a date string as `M/D/YYYY, h:mm:ss AM`
///
/// Midnight is `12:00:00 AM` and noon is `12:00:00 PM`.
pub fn format_date(date: &str) -> Result<String> {
    Ok(format_instant_with(&parse_instant(date)?, DISPLAY_FORMAT))
}

/// Number of Saturdays and Sundays in a 1-based `month` of `year`
pub fn get_count_weekends_in_month(month: u32, year: i32) -> Result<u32> {
    Ok(month_days(month, year)?.filter(|d| is_weekend(d.weekday())).count() as u32)
}

/// Week of the year, starting at 1
///
/// Week 1 holds January 1st and weeks roll over on Mondays:
/// `ceil((day_of_year + weekday_of_jan_0) / 7)`, where January 0 is the last
/// day of the previous year and weekdays count from Sunday = 0.
pub fn get_week_number_by_date(date: &Instant) -> u32 {
    let day = date.date_naive();
    let ordinal = day.ordinal();
    let jan_0 = (day.weekday().num_days_from_sunday() + 7 - ordinal % 7) % 7;
    (ordinal + jan_0).div_ceil(7)
}

/// The first Friday the 13th strictly after `date`, at the same time of day
///
/// # Errors
/// Returns [`DateError::OutOfRange`] past the end of the representable calendar.
pub fn get_next_friday_the_13th(date: &Instant) -> Result<Instant> {
    let from = date.date_naive();
    let out_of_range = || DateError::OutOfRange(format!("no Friday the 13th after {from}"));

    let this_month = NaiveDate::from_ymd_opt(from.year(), from.month(), 13).ok_or_else(out_of_range)?;
    let mut candidate = if from.day() < 13 {
        this_month
    } else {
        this_month.checked_add_months(Months::new(1)).ok_or_else(out_of_range)?
    };

    while candidate.weekday() != Weekday::Fri {
        candidate = candidate.checked_add_months(Months::new(1)).ok_or_else(out_of_range)?;
    }
    Ok(candidate.and_time(date.time()).and_utc())
}

/// Calendar quarter (1-4) of `date`
pub fn get_quarter(date: &Instant) -> u32 {
    quarter_of(date.month())
}

/// `DD-MM-YYYY` working dates of a `DD-MM-YYYY` period
///
/// The period's first day starts a cycle of `work_days` working days followed
/// by `off_days` days off, repeated through the last day.
pub fn get_work_schedule(period: &Period, work_days: u32, off_days: u32) -> Result<Vec<String>> {
    WorkSchedule::new(work_days, off_days)?.generate(period)
}

/// Whether the year of `date` is a leap year
pub fn is_leap_year(date: &Instant) -> bool {
    is_leap(date.year())
}
