//! datekit - small, pure date and time helpers
//!
//! Timestamp conversion, formatting, weekday and weekend counting, leap years
//! and work schedule generation. Every helper is a pure function of its
//! inputs and reads calendar fields in UTC.
//!
//! # Modules
//!
//! * [`dates`] - The date helpers, also re-exported at the crate root
//! * [`period`] - Inclusive date ranges
//! * [`schedule`] - Repeating work/off day schedules
//! * [`config`] - Format and logging configuration
//! * [`logger`] - `fern` based logging setup
//! * [`utils`] - Parsing, formatting and calendar arithmetic

/// Configuration module for formats and logging
pub mod config;

/// Crate constants and default values
pub mod constants;

/// The date helpers
pub mod dates;

/// Error type shared by all helpers
pub mod error;

/// Logging setup
pub mod logger;

/// Inclusive date ranges
pub mod period;

/// Work/off day schedules
pub mod schedule;

/// Utility functions for date/time handling
pub mod utils;

pub use dates::{
    date_to_timestamp, format_date, get_count_days_in_month, get_count_days_on_period, get_count_weekends_in_month,
    get_day_name, get_next_friday, get_next_friday_the_13th, get_quarter, get_time, get_week_number_by_date,
    get_work_schedule, is_date_in_period, is_leap_year,
};
pub use error::{DateError, Result};
pub use period::{DatePeriod, Period};
pub use schedule::WorkSchedule;
pub use utils::datetime::{parse_instant, Instant};
