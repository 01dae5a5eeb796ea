//! The date-time grammar: full RFC 3339 timestamps.

use chrono::{DateTime, FixedOffset};

use crate::error::{IsoError, Result};

/// Parse an ISO-formatted date/time string (e.g.
/// `"2019-05-22T12:33:53.045Z"`) into the exact instant it represents,
/// keeping the offset the input carried.
///
/// Unlike the other grammars, there are enough variants here (Z vs. numeric
/// offsets, 0-9 fractional digits) that delegating to chrono's RFC 3339
/// parser beats a hand-rolled check. The one place we are stricter: chrono
/// silently truncates fractional seconds past nanosecond precision, and we
/// reject them instead.
///
/// # Errors
///
/// Returns [`IsoError::InvalidDatetime`] for anything chrono cannot parse,
/// and for inputs with 10 or more fractional-second digits.
///
/// # Examples
///
/// ```
/// use isodates::parse_date_time;
///
/// let dt = parse_date_time("2019-03-04T16:04:44.000+07:30").unwrap();
/// assert_eq!(dt.offset().local_minus_utc(), 27_000);
/// ```
pub fn parse_date_time(input: &str) -> Result<DateTime<FixedOffset>> {
    if let Some(dot) = input.find('.') {
        let digits = input[dot + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits > 9 {
            return Err(IsoError::InvalidDatetime(format!(
                "'{input}': more than 9 fractional digits"
            )));
        }
    }

    DateTime::parse_from_rfc3339(input)
        .map_err(|e| IsoError::InvalidDatetime(format!("'{input}': {e}")))
}
