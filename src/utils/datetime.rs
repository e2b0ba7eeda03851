//! Date and time parsing and formatting helpers
//!
//! Every textual date entering the crate goes through [`parse_instant`], so all
//! public helpers accept the same set of formats and fail the same way.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc, Weekday};
use log::debug;

use crate::constants::{ISO_DATE_FORMAT, LOG_PARSE_FAILED};
use crate::error::{DateError, Result};

/// A point in time with (at least) millisecond resolution, always in UTC.
pub type Instant = DateTime<Utc>;

/// Naive layouts tried after the zoned ones. Naive input is read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// `01 Jan 1970 00:00:00` style layouts, with the zone name stripped first.
const DAY_MONTH_FORMATS: [&str; 2] = ["%d %b %Y %H:%M:%S", "%a, %d %b %Y %H:%M:%S"];

/// Parse a date string into an [`Instant`]
///
/// Accepted layouts, tried in order:
/// * RFC 3339 (`2024-02-01T15:00:00.000Z`)
/// * RFC 2822 (`Thu, 01 Jan 1970 00:00:00 +0000`)
/// * `01 Jan 1970 00:00:00 UTC` (or `GMT`, or no zone)
/// * `2024-02-01T15:00:00[.000]` and `2024-02-01 15:00:00`
/// * `2024-02-01` (midnight), optionally followed by `Z`, `UTC` or `GMT`
///
/// # Errors
/// Returns [`DateError::InvalidInput`] when no layout matches.
pub fn parse_instant(input: &str) -> Result<Instant> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let unzoned = strip_utc_suffix(s);
    for fmt in DAY_MONTH_FORMATS.iter().chain(NAIVE_DATETIME_FORMATS.iter()) {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(unzoned, fmt) {
            return Ok(ndt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(unzoned, ISO_DATE_FORMAT) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|ndt| ndt.and_utc())
            .ok_or_else(|| DateError::OutOfRange(input.to_string()));
    }

    debug!("{}: {:?}", LOG_PARSE_FAILED, input);
    Err(DateError::InvalidInput(input.to_string()))
}

fn strip_utc_suffix(s: &str) -> &str {
    ["UTC", "GMT", "Z"]
        .iter()
        .find_map(|zone| s.strip_suffix(zone))
        .map(str::trim_end)
        .unwrap_or(s)
}

/// Parse a calendar date with an explicit `strftime` pattern
///
/// # Errors
/// Returns [`DateError::InvalidInput`] if `input` does not match `format`.
pub fn parse_schedule_date(input: &str, format: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), format).map_err(|e| {
        debug!("{}: {:?} with format {:?} ({})", LOG_PARSE_FAILED, input, format, e);
        DateError::InvalidInput(input.to_string())
    })
}

/// Format a calendar date with an explicit `strftime` pattern
pub fn format_schedule_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Format an instant with an explicit `strftime` pattern
pub fn format_instant_with(instant: &Instant, format: &str) -> String {
    instant.format(format).to_string()
}

/// Get a human-readable weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_utc_suffix() {
        assert_eq!(strip_utc_suffix("01 Jan 1970 00:00:00 UTC"), "01 Jan 1970 00:00:00");
        assert_eq!(strip_utc_suffix("01 Jan 1970 00:00:00 GMT"), "01 Jan 1970 00:00:00");
        assert_eq!(strip_utc_suffix("01 Jan 1970 00:00:00"), "01 Jan 1970 00:00:00");
    }

    #[test]
    fn test_naive_input_is_utc() {
        let with_zone = parse_instant("2024-02-01T15:00:00Z").unwrap();
        let naive = parse_instant("2024-02-01T15:00:00").unwrap();
        assert_eq!(with_zone, naive);
    }

    #[test]
    fn test_date_only_with_zone_suffix() {
        let midnight = parse_instant("2024-02-01").unwrap();
        assert_eq!(parse_instant("2024-02-01Z").unwrap(), midnight);
        assert_eq!(parse_instant("2024-02-01 UTC").unwrap(), midnight);
    }
}
