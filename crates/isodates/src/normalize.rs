//! Calendar normalization: turning raw, possibly-overflowing field values
//! into real Gregorian dates.
//!
//! Overflow handling is deliberate behavior, not error suppression: a day of
//! 32 in a 31-day month rolls forward into the next month, and week numbers
//! past a short ISO year roll into the following one. Rather than hand-roll
//! days-per-month tables, we build a concrete [`NaiveDate`] and let chrono's
//! calendar arithmetic do the carrying.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{IsoError, Result};

/// Reference year for month/day normalization when no year is known. It is a
/// leap year so that `--02-29` survives as February 29 instead of rolling.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// Build the real calendar date for a raw year/month/day triple, rolling any
/// day overflow forward: day 29/30/31 in a short February lands in March,
/// day 32+ lands in the following month(s), possibly crossing into the next
/// year (e.g. December 32 becomes January 1).
///
/// `month` must already be validated to 1-12; `day` may be any value >= 1.
pub(crate) fn normalized_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(chrono::Days::new(u64::from(day) - 1)))
        .ok_or_else(|| IsoError::InvalidDatetime(format!("{year:04}-{month:02}-{day:02}")))
}

/// Normalize a raw month/day pair with no year context. Overflow is resolved
/// in a reference leap year, so February 29 is kept as-is and anything later
/// rolls forward (`(5, 32)` becomes June 1, `(5, 65)` becomes July 4).
pub(crate) fn roll_month_day(month: u32, day: u32) -> Result<(u32, u32)> {
    if day <= 28 {
        return Ok((month, day));
    }
    let date = normalized_date(REFERENCE_LEAP_YEAR, month, day)?;
    Ok((date.month(), date.day()))
}

/// The Gregorian date of Monday of the given ISO week.
///
/// Uses the January 4th rule: January 4 always falls in week 1 of its ISO
/// year, so Monday of week 1 is January 4 minus its offset from Monday, and
/// every later week is a whole number of weeks after that. Week numbers past
/// a 52-week year's end are not rejected here; they land in the next ISO
/// year's weeks, matching the projection primitive this replaces.
pub(crate) fn iso_week_start(iso_year: i32, week: u32) -> Result<NaiveDate> {
    let jan4 = NaiveDate::from_ymd_opt(iso_year, 1, 4)
        .ok_or_else(|| IsoError::InvalidYear(iso_year.to_string()))?;
    let week1_monday = jan4 - Duration::days(i64::from(jan4.weekday().num_days_from_monday()));
    Ok(week1_monday + Duration::weeks(i64::from(week) - 1))
}
