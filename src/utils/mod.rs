//! Utility modules for the date helpers.
//!
//! These are the building blocks the public operations in [`crate::dates`]
//! are written on top of.
//!
//! # Available Utilities
//!
//! - [`date`] - Calendar arithmetic on plain dates (weekdays, month lengths, quarters)
//! - [`datetime`] - Parsing, formatting and naming of instants

pub mod date;
pub mod datetime;
