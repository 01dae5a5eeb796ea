//! The ISO week-day grammar: `YYYY-Www-D`.

use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{IsoError, Result};
use crate::week::parse_week;
use crate::{fields, normalize, project};

/// An ISO week date: week-numbering year, week, and weekday offset within
/// the week (1 = Monday through 7 = Sunday). Projected to a Gregorian date
/// by adding `weekday - 1` days to the Monday that starts the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IsoWeekDate {
    /// The ISO week-numbering year.
    pub year: i32,
    /// 1-53.
    pub week: u32,
    /// 1 = Monday, 7 = Sunday.
    pub weekday: u32,
}

fn invalid_format(input: &str) -> IsoError {
    IsoError::InvalidFormat {
        expected: "YYYY-W##-#",
        input: input.to_string(),
    }
}

/// Parse an ISO year/week/day string (e.g. `"2019-W04-3"`) into its
/// components. Exactly 10 characters: the week grammar plus a dash and a
/// single unpadded weekday digit.
///
/// # Examples
///
/// ```
/// use isodates::parse_week_day;
///
/// let wd = parse_week_day("2019-W04-3").unwrap();
/// assert_eq!((wd.year, wd.week, wd.weekday), (2019, 4, 3));
/// ```
pub fn parse_week_day(input: &str) -> Result<IsoWeekDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || !input.is_ascii() {
        return Err(invalid_format(input));
    }
    if &bytes[4..6] != b"-W" || bytes[8] != b'-' {
        return Err(invalid_format(input));
    }

    let week = parse_week(&input[..8])?;
    let weekday = fields::parse_weekday_offset(&input[9..])?;
    Ok(IsoWeekDate {
        year: week.year,
        week: week.week,
        weekday,
    })
}

/// Midnight UTC on the exact date the ISO week-day string names. Week 1 of
/// an ISO year can start in the prior Gregorian year, so
/// `"2019-W01-1"` is December 31, 2018.
pub fn parse_week_day_start(input: &str) -> Result<DateTime<Tz>> {
    project::midnight(parse_week_day_naive(input)?, chrono_tz::UTC)
}

/// Midnight on the named date in the given IANA time zone.
pub fn parse_week_day_start_in(input: &str, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse week day start")?;
    project::midnight(parse_week_day_naive(input)?, tz)
}

/// 23:59:59.999999999 UTC on the exact date the ISO week-day string names.
pub fn parse_week_day_end(input: &str) -> Result<DateTime<Tz>> {
    project::almost_midnight(parse_week_day_naive(input)?, chrono_tz::UTC)
}

/// 23:59:59.999999999 on the named date in the given IANA time zone.
pub fn parse_week_day_end_in(input: &str, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse week day end")?;
    project::almost_midnight(parse_week_day_naive(input)?, tz)
}

fn parse_week_day_naive(input: &str) -> Result<NaiveDate> {
    let wd = parse_week_day(input)?;
    // An offset of 1 means the first day of the week, so add zero days.
    let monday = normalize::iso_week_start(wd.year, wd.week)?;
    Ok(monday + Duration::days(i64::from(wd.weekday) - 1))
}
