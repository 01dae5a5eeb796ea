//! Field parsers for the numeric substrings of the ISO 8601 grammars.
//!
//! Each parser owns exactly one range rule. The format recognizers slice the
//! input and hand the pieces here, so by the time these run the substring
//! boundaries are already known to be correct — the only remaining questions
//! are "is this a number?" and "is it in range?".

use crate::error::{IsoError, Result};

/// Parse a year field. Any decimal integer is accepted — years may be zero
/// or negative (the year/month grammar passes the sign through in the text).
pub(crate) fn parse_year(text: &str) -> Result<i32> {
    text.parse::<i32>()
        .map_err(|_| IsoError::InvalidYear(text.to_string()))
}

/// Parse a month field (1-12).
pub(crate) fn parse_month(text: &str) -> Result<u32> {
    match text.parse::<i64>() {
        Ok(month @ 1..=12) => Ok(month as u32),
        _ => Err(IsoError::InvalidMonth(text.to_string())),
    }
}

/// Parse a day-of-month field. The only rule here is `day >= 1`: there is
/// deliberately no upper bound, because overflow days like "32" roll into
/// the following month during normalization rather than failing here.
pub(crate) fn parse_day_of_month(text: &str) -> Result<u32> {
    match text.parse::<i64>() {
        Ok(day) if day >= 1 => {
            u32::try_from(day).map_err(|_| IsoError::InvalidDayOfMonth(text.to_string()))
        }
        _ => Err(IsoError::InvalidDayOfMonth(text.to_string())),
    }
}

/// Parse an ISO week number field (1-53).
pub(crate) fn parse_week_number(text: &str) -> Result<u32> {
    match text.parse::<i64>() {
        Ok(week @ 1..=53) => Ok(week as u32),
        _ => Err(IsoError::InvalidWeekNumber(text.to_string())),
    }
}

/// Parse an ISO weekday offset field (1-7, 1 = Monday).
pub(crate) fn parse_weekday_offset(text: &str) -> Result<u32> {
    match text.parse::<i64>() {
        Ok(offset @ 1..=7) => Ok(offset as u32),
        _ => Err(IsoError::InvalidWeekdayOffset(text.to_string())),
    }
}
