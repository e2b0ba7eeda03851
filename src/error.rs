//! Error types shared by every date helper.

/// Errors returned by the date helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date input: {0:?}")]
    InvalidInput(String),

    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),

    #[error("Invalid work cycle: {work_days} work days and {off_days} off days")]
    InvalidCycle { work_days: u32, off_days: u32 },

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, DateError>;
