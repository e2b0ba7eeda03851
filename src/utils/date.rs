//! Calendar arithmetic on plain dates

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{DateError, Result};

/// Calculate the next occurrence of a target weekday from a given date
///
/// The result is always strictly after `from`: asking for the weekday `from`
/// already falls on yields the date one week later. `None` past the end of
/// the representable calendar.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let from_w = u64::from(from.weekday().num_days_from_monday());
    let tgt_w = u64::from(target.num_days_from_monday());
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from.checked_add_days(Days::new(delta))
}

/// Gregorian leap year rule
pub fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a 1-based `month` of `year`
///
/// # Errors
/// Returns [`DateError::InvalidMonth`] if `month` is not in `1..=12`.
pub fn days_in_month(month: u32, year: i32) -> Result<u32> {
    match month {
        2 => Ok(if is_leap(year) { 29 } else { 28 }),
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        _ => Err(DateError::InvalidMonth(month)),
    }
}

/// Every date of a 1-based `month`, in order
///
/// # Errors
/// Returns [`DateError::InvalidMonth`] for a bad month and
/// [`DateError::OutOfRange`] if the year is outside chrono's range.
pub fn month_days(month: u32, year: i32) -> Result<impl Iterator<Item = NaiveDate>> {
    let count = days_in_month(month, year)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DateError::OutOfRange(format!("{year}-{month:02}")))?;
    Ok(first.iter_days().take(count as usize))
}

/// Calendar quarter (1-4) of a 1-based month
pub fn quarter_of(month: u32) -> u32 {
    (month.saturating_sub(1) / 3) + 1
}

/// Whether a weekday is Saturday or Sunday
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
