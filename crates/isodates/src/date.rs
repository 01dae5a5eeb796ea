//! The plain calendar date grammar: `YYYY-MM-DD`.

use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{IsoError, Result};
use crate::{fields, normalize, project};

/// A normalized Gregorian calendar date. Once constructed, `month` is always
/// 1-12 and `day` is a real day of that month — overflow input like day 33
/// has already been rolled forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
    pub day: u32,
}

fn invalid_format(input: &str) -> IsoError {
    IsoError::InvalidFormat {
        expected: "YYYY-MM-DD",
        input: input.to_string(),
    }
}

/// Parse an ISO-formatted year-month-day string (e.g. `"2019-05-22"`) into
/// the exact calendar date it represents.
///
/// The grammar is strict: exactly 10 characters with dashes at indexes 4 and
/// 7, so a 1-digit year or an unpadded month is rejected rather than
/// coerced. Overflow days roll forward using real calendar arithmetic:
/// `"2005-02-29"` (not a leap year) normalizes to March 1, 2005.
///
/// # Errors
///
/// Returns [`IsoError::InvalidFormat`] if the shape does not match, or a
/// field error naming the offending component if a number is out of range.
///
/// # Examples
///
/// ```
/// use isodates::parse_date;
///
/// let date = parse_date("2019-05-22").unwrap();
/// assert_eq!((date.year, date.month, date.day), (2019, 5, 22));
///
/// // Day overflow rolls into the next month
/// let date = parse_date("2005-01-33").unwrap();
/// assert_eq!((date.month, date.day), (2, 2));
/// ```
pub fn parse_date(input: &str) -> Result<CalendarDate> {
    let date = parse_date_naive(input)?;
    Ok(CalendarDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}

/// Midnight UTC on the parsed date. Use [`parse_date_start_in`] for a zone
/// other than UTC.
pub fn parse_date_start(input: &str) -> Result<DateTime<Tz>> {
    let date = parse_date_naive(input)?;
    project::midnight(date, chrono_tz::UTC)
}

/// Midnight on the parsed date in the given IANA time zone.
pub fn parse_date_start_in(input: &str, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse date start")?;
    let date = parse_date_naive(input)?;
    project::midnight(date, tz)
}

/// 23:59:59.999999999 UTC on the parsed date. Use [`parse_date_end_in`] for
/// a zone other than UTC.
pub fn parse_date_end(input: &str) -> Result<DateTime<Tz>> {
    let date = parse_date_naive(input)?;
    project::almost_midnight(date, chrono_tz::UTC)
}

/// 23:59:59.999999999 on the parsed date in the given IANA time zone.
pub fn parse_date_end_in(input: &str, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse date end")?;
    let date = parse_date_naive(input)?;
    project::almost_midnight(date, tz)
}

fn parse_date_naive(input: &str) -> Result<NaiveDate> {
    // A general date-time parser could handle this, but the fixed grammar
    // lets a couple of byte checks replace all of that machinery. This is
    // the hottest format, so it is worth the specialization.
    let bytes = input.as_bytes();
    if bytes.len() != 10 || !input.is_ascii() {
        return Err(invalid_format(input));
    }
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid_format(input));
    }

    let year = fields::parse_year(&input[..4])?;
    let month = fields::parse_month(&input[5..7])?;
    let day = fields::parse_day_of_month(&input[8..])?;
    normalize::normalized_date(year, month, day)
}
