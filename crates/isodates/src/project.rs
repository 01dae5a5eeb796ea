//! Timestamp projection: anchoring a normalized calendar date to an explicit
//! time zone as either the first or the last instant of the day.
//!
//! The time zone is always an explicit argument — there is no fallback to a
//! system zone. The plain (non-`_in`) operations use literal UTC.

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::error::{IsoError, Result};

/// Parse an IANA time zone name. An empty name is a configuration error
/// (carrying `op`, the operation that required the zone); an unknown name is
/// an invalid-timezone error. This check always runs before any text
/// parsing, so a missing zone fails even for garbage input.
pub(crate) fn parse_timezone(name: &str, op: &'static str) -> Result<Tz> {
    if name.trim().is_empty() {
        return Err(IsoError::MissingTimezone(op));
    }
    name.parse::<Tz>()
        .map_err(|_| IsoError::InvalidTimezone(name.to_string()))
}

/// The given date at exactly 00:00:00.000000000 in the given zone.
pub(crate) fn midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    date.and_hms_opt(0, 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).single())
        .ok_or_else(|| nonexistent(date, tz))
}

/// The given date at exactly 23:59:59.999999999 in the given zone — one
/// nanosecond before the next midnight, never the next day.
pub(crate) fn almost_midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .and_then(|naive| tz.from_local_datetime(&naive).single())
        .ok_or_else(|| nonexistent(date, tz))
}

/// A DST transition can make a local wall-clock time ambiguous or skip it
/// entirely; we refuse to guess which instant was meant.
fn nonexistent(date: NaiveDate, tz: Tz) -> IsoError {
    IsoError::InvalidDatetime(format!("no unambiguous local time for {date} in {tz}"))
}
