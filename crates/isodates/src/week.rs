//! The ISO week grammar: `YYYY-Www`.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{IsoError, Result};
use crate::{fields, normalize, project};

/// An ISO week-numbering year and week. Not a calendar date until projected:
/// week 1 of an ISO year can start in the prior Gregorian year, and week 53
/// of a short ISO year rolls into the following one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IsoWeek {
    /// The ISO week-numbering year, which can differ from the Gregorian year
    /// near year boundaries.
    pub year: i32,
    /// 1-53.
    pub week: u32,
}

fn invalid_format(input: &str) -> IsoError {
    IsoError::InvalidFormat {
        expected: "YYYY-W##",
        input: input.to_string(),
    }
}

/// Parse an ISO year/week string (e.g. `"2019-W04"`) into the year and week
/// number it represents. Exactly 8 characters with a literal `-W` at index
/// 4; the week number must be 01-53.
///
/// # Examples
///
/// ```
/// use isodates::parse_week;
///
/// let week = parse_week("2019-W04").unwrap();
/// assert_eq!((week.year, week.week), (2019, 4));
///
/// // Weeks only go up to 53
/// assert!(parse_week("2019-W72").is_err());
/// ```
pub fn parse_week(input: &str) -> Result<IsoWeek> {
    let bytes = input.as_bytes();
    if bytes.len() != 8 || !input.is_ascii() {
        return Err(invalid_format(input));
    }
    if &bytes[4..6] != b"-W" {
        return Err(invalid_format(input));
    }

    let year = fields::parse_year(&input[..4])?;
    let week = fields::parse_week_number(&input[6..])?;
    Ok(IsoWeek { year, week })
}

/// Midnight UTC on Monday of the given ISO week. Use [`parse_week_start_in`]
/// for midnight in some local time instead.
pub fn parse_week_start(input: &str) -> Result<DateTime<Tz>> {
    let week = parse_week(input)?;
    project::midnight(normalize::iso_week_start(week.year, week.week)?, chrono_tz::UTC)
}

/// Midnight on Monday of the given ISO week in the given IANA time zone.
pub fn parse_week_start_in(input: &str, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse week start")?;
    let week = parse_week(input)?;
    project::midnight(normalize::iso_week_start(week.year, week.week)?, tz)
}

/// 23:59:59.999999999 UTC (one nanosecond before midnight) on Sunday of the
/// given ISO week.
pub fn parse_week_end(input: &str) -> Result<DateTime<Tz>> {
    let week = parse_week(input)?;
    let sunday = normalize::iso_week_start(week.year, week.week)? + Duration::days(6);
    project::almost_midnight(sunday, chrono_tz::UTC)
}

/// 23:59:59.999999999 on Sunday of the given ISO week in the given IANA
/// time zone.
pub fn parse_week_end_in(input: &str, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse week end")?;
    let week = parse_week(input)?;
    let sunday = normalize::iso_week_start(week.year, week.week)? + Duration::days(6);
    project::almost_midnight(sunday, tz)
}
