//! Error types for isodates operations.

use thiserror::Error;

/// Every failure an isodates operation can report.
///
/// Failures fall into three groups: the overall shape of the input did not
/// match the grammar ([`IsoError::InvalidFormat`]), a field parsed but was
/// out of range or not a number at all (the `Invalid*` field variants), or a
/// required time zone argument was missing or unknown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsoError {
    /// Length or separator placement did not match the expected grammar.
    /// Carries the expected format (e.g. `"YYYY-MM-DD"`) and the raw input.
    #[error("Invalid {expected} format: {input}")]
    InvalidFormat {
        expected: &'static str,
        input: String,
    },

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day of month: {0}")]
    InvalidDayOfMonth(String),

    #[error("Invalid week number: {0}")]
    InvalidWeekNumber(String),

    #[error("Invalid weekday offset: {0}")]
    InvalidWeekdayOffset(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A `*_in` operation was called without a time zone. Carries the name
    /// of the operation so the caller knows which argument was empty.
    #[error("Missing timezone: {0}")]
    MissingTimezone(&'static str),
}

pub type Result<T> = std::result::Result<T, IsoError>;
