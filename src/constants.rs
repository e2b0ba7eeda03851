//! Constants used throughout the crate
//!
//! Format strings are chrono `strftime` patterns.

/// Date format used by work schedules (`DD-MM-YYYY`)
pub const SCHEDULE_DATE_FORMAT: &str = "%d-%m-%Y";

/// 24-hour wall clock format (`hh:mm:ss`)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// US style display format (`M/D/YYYY, h:mm:ss AM`)
pub const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// ISO calendar date format
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Config
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Log Messages
pub const LOG_PARSE_FAILED: &str = "Could not parse date input";
pub const LOG_SCHEDULE_GENERATED: &str = "Generated work schedule";
