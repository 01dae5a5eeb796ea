//! The month/day grammar: `--MM-DD` with optional zero padding.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{IsoError, Result};
use crate::{fields, normalize, project};

/// A month and day with no year attached. Normalized against a reference
/// leap year, so February 29 is representable and day overflow has already
/// rolled forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthDay {
    /// 1 = January.
    pub month: u32,
    pub day: u32,
}

fn invalid_format(input: &str) -> IsoError {
    IsoError::InvalidFormat {
        expected: "--MM-DD",
        input: input.to_string(),
    }
}

/// Parse an ISO-formatted month/day string (e.g. `"--04-01"` is April 1)
/// into the month and day it represents.
///
/// Both components may appear unpadded, so all of `"--3-1"`, `"--03-1"`,
/// `"--3-01"`, and `"--03-01"` are valid. Because the month can be one or
/// two digits, the recognizer locates the month/day separator by checking
/// index 3 and then index 4.
///
/// Days past 28 are normalized in a leap year, so `"--02-29"` is kept while
/// genuine overflow rolls forward into later months.
///
/// # Examples
///
/// ```
/// use isodates::parse_month_day;
///
/// let md = parse_month_day("--04-01").unwrap();
/// assert_eq!((md.month, md.day), (4, 1));
///
/// // Automatic rollover into subsequent months
/// let md = parse_month_day("--01-34").unwrap();
/// assert_eq!((md.month, md.day), (2, 3));
/// ```
pub fn parse_month_day(input: &str) -> Result<MonthDay> {
    let bytes = input.as_bytes();

    // All valid inputs are between 5 and 7 chars: "--3-1" up to "--03-01"
    if !(5..=7).contains(&bytes.len()) || !input.is_ascii() {
        return Err(invalid_format(input));
    }
    let (month_text, day_text) = if bytes[3] == b'-' {
        // Month not padded: "--3-27", "--3-05", "--3-5"
        (&input[2..3], &input[4..])
    } else if bytes[4] == b'-' {
        // Month is padded: "--03-27", "--03-05", "--03-5"
        (&input[2..4], &input[5..])
    } else {
        return Err(invalid_format(input));
    };

    let month = fields::parse_month(month_text)?;
    let day = fields::parse_day_of_month(day_text)?;

    // Something like January 32nd is actually February 1st.
    let (month, day) = normalize::roll_month_day(month, day)?;
    Ok(MonthDay { month, day })
}

/// Midnight UTC on the parsed month/day in the given year.
pub fn parse_month_day_start(input: &str, year: i32) -> Result<DateTime<Tz>> {
    let md = parse_month_day(input)?;
    project::midnight(normalize::normalized_date(year, md.month, md.day)?, chrono_tz::UTC)
}

/// Midnight on the parsed month/day in the given year and IANA time zone.
///
/// The date is re-normalized in the target year, so `"--02-29"` projected
/// onto a non-leap year rolls to March 1 of that year.
pub fn parse_month_day_start_in(input: &str, year: i32, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse month day start")?;
    let md = parse_month_day(input)?;
    project::midnight(normalize::normalized_date(year, md.month, md.day)?, tz)
}

/// 23:59:59.999999999 UTC on the parsed month/day in the given year.
pub fn parse_month_day_end(input: &str, year: i32) -> Result<DateTime<Tz>> {
    let md = parse_month_day(input)?;
    project::almost_midnight(normalize::normalized_date(year, md.month, md.day)?, chrono_tz::UTC)
}

/// 23:59:59.999999999 on the parsed month/day in the given year and IANA
/// time zone.
pub fn parse_month_day_end_in(input: &str, year: i32, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse month day end")?;
    let md = parse_month_day(input)?;
    project::almost_midnight(normalize::normalized_date(year, md.month, md.day)?, tz)
}
