//! The year/month grammar: `YYYY-MM`, with an optional `+`/`-` year prefix.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{IsoError, Result};
use crate::{fields, project};

/// A year and month. The year may be zero or negative (proleptic Gregorian,
/// astronomical year numbering) when the signed-prefix variant is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
}

fn invalid_format(input: &str) -> IsoError {
    IsoError::InvalidFormat {
        expected: "[+-]YYYY-MM",
        input: input.to_string(),
    }
}

/// Parse an ISO year/month string such as `"2019-04"` into its components.
/// The 8-character variant prefixes the year with `+` or `-`; any other
/// leading character is invalid, even another digit, so `"02019-01"` is
/// rejected.
///
/// # Examples
///
/// ```
/// use isodates::parse_year_month;
///
/// let ym = parse_year_month("2019-04").unwrap();
/// assert_eq!((ym.year, ym.month), (2019, 4));
///
/// let ym = parse_year_month("-0001-01").unwrap();
/// assert_eq!((ym.year, ym.month), (-1, 1));
/// ```
pub fn parse_year_month(input: &str) -> Result<YearMonth> {
    let bytes = input.as_bytes();
    if !(7..=8).contains(&bytes.len()) || !input.is_ascii() {
        return Err(invalid_format(input));
    }

    let (year_text, month_text) = if bytes.len() == 8 {
        if bytes[5] != b'-' {
            return Err(invalid_format(input));
        }
        match bytes[0] {
            b'+' => (&input[1..5], &input[6..]),
            // Keep the sign so the year parses as negative
            b'-' => (&input[..5], &input[6..]),
            _ => return Err(invalid_format(input)),
        }
    } else {
        if bytes[4] != b'-' {
            return Err(invalid_format(input));
        }
        (&input[..4], &input[5..])
    };

    let year = fields::parse_year(year_text)?;
    let month = fields::parse_month(month_text)?;
    Ok(YearMonth { year, month })
}

/// Midnight UTC on the first day of the parsed year/month.
pub fn parse_year_month_start(input: &str) -> Result<DateTime<Tz>> {
    let ym = parse_year_month(input)?;
    project::midnight(first_of_month(ym)?, chrono_tz::UTC)
}

/// Midnight on the first day of the parsed year/month in the given IANA
/// time zone.
pub fn parse_year_month_start_in(input: &str, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse year month start")?;
    let ym = parse_year_month(input)?;
    project::midnight(first_of_month(ym)?, tz)
}

/// 23:59:59.999999999 UTC on the last day of the parsed year/month.
pub fn parse_year_month_end(input: &str) -> Result<DateTime<Tz>> {
    let ym = parse_year_month(input)?;
    project::almost_midnight(last_of_month(ym)?, chrono_tz::UTC)
}

/// 23:59:59.999999999 on the last day of the parsed year/month in the given
/// IANA time zone.
pub fn parse_year_month_end_in(input: &str, timezone: &str) -> Result<DateTime<Tz>> {
    let tz = project::parse_timezone(timezone, "parse year month end")?;
    let ym = parse_year_month(input)?;
    project::almost_midnight(last_of_month(ym)?, tz)
}

fn first_of_month(ym: YearMonth) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(ym.year, ym.month, 1)
        .ok_or_else(|| IsoError::InvalidDatetime(format!("{:04}-{:02}", ym.year, ym.month)))
}

/// Last day of the month: the day before the first of the next month, which
/// handles leap Februaries without a day table.
fn last_of_month(ym: YearMonth) -> Result<NaiveDate> {
    let (year, month) = if ym.month == 12 {
        (ym.year + 1, 1)
    } else {
        (ym.year, ym.month + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .ok_or_else(|| IsoError::InvalidDatetime(format!("{:04}-{:02}", ym.year, ym.month)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_almost_midnight, assert_midnight, LOS_ANGELES, NEW_YORK};

    fn succeeds(input: &str, year: i32, month: u32) {
        let ym = parse_year_month(input).unwrap();
        assert_eq!((ym.year, ym.month), (year, month), "input: {input}");
    }

    fn fails(input: &str) {
        assert!(parse_year_month(input).is_err(), "expected failure: {input}");
    }

    #[test]
    fn test_parse_year_month_rejects_bad_shapes() {
        fails("");
        fails("not valid");
        fails("------");
        fails("01-2019");
        fails("2019/01");
        fails("+2000/01");
        fails("123456789");
        fails("2019-01-03"); // good ISO date, not a good ISO year/month
    }

    #[test]
    fn test_parse_year_month_rejects_bad_fields() {
        fails("2019--1"); // -1 not a valid month
        fails("2019-13");
        fails("2019-00");
        fails("2019-"); // month must be padded
        fails("2019-5"); // month must be padded
        fails("123-05"); // year must be padded
        fails("23-05");
        fails("3-05");
        fails("2019-O1"); // an "oh", not a zero
        fails("2019-xx");
        fails("xxxx-03");
    }

    #[test]
    fn test_parse_year_month_prefix_must_be_sign() {
        fails("02019-01");
        fails("2019--01");
        fails("_2019-01");
        fails("x2019-01");
    }

    #[test]
    fn test_parse_year_month_unsigned() {
        succeeds("2000-01", 2000, 1);
        succeeds("2000-11", 2000, 11);
        succeeds("2019-11", 2019, 11);
        succeeds("1215-06", 1215, 6);
        succeeds("0123-12", 123, 12);
        succeeds("0012-12", 12, 12);
        succeeds("0001-01", 1, 1);
        succeeds("0000-01", 0, 1);
    }

    #[test]
    fn test_parse_year_month_plus_prefix() {
        succeeds("+2000-01", 2000, 1);
        succeeds("+2019-11", 2019, 11);
        succeeds("+0123-12", 123, 12);
        succeeds("+0001-12", 1, 12);
        succeeds("+0000-01", 0, 1);
    }

    #[test]
    fn test_parse_year_month_minus_prefix() {
        succeeds("-2000-01", -2000, 1);
        succeeds("-2019-11", -2019, 11);
        succeeds("-1215-06", -1215, 6);
        succeeds("-0123-12", -123, 12);
        succeeds("-0001-12", -1, 12);
        succeeds("-0001-01", -1, 1);
        succeeds("-0000-01", 0, 1);
    }

    #[test]
    fn test_parse_year_month_start() {
        let dt = parse_year_month_start("2000-01").unwrap();
        assert_midnight(dt, chrono_tz::UTC, 2000, 1, 1);
        let dt = parse_year_month_start("2003-12").unwrap();
        assert_midnight(dt, chrono_tz::UTC, 2003, 12, 1);
        assert!(parse_year_month_start("2019/01").is_err());
    }

    #[test]
    fn test_parse_year_month_start_in() {
        let dt = parse_year_month_start_in("2019-01", "America/New_York").unwrap();
        assert_midnight(dt, NEW_YORK, 2019, 1, 1);
        let dt = parse_year_month_start_in("2000-12", "America/Los_Angeles").unwrap();
        assert_midnight(dt, LOS_ANGELES, 2000, 12, 1);
    }

    #[test]
    fn test_parse_year_month_end_picks_last_day() {
        let cases = [
            ("2000-01", 2000, 1, 31),
            ("2019-01", 2019, 1, 31),
            ("2000-04", 2000, 4, 30),
            ("2000-02", 2000, 2, 29), // leap year
            ("2003-02", 2003, 2, 28),
            ("2000-12", 2000, 12, 31),
            ("2013-12", 2013, 12, 31),
        ];
        for (input, year, month, day) in cases {
            let dt = parse_year_month_end(input).unwrap();
            assert_almost_midnight(dt, chrono_tz::UTC, year, month, day);
        }
    }

    #[test]
    fn test_parse_year_month_end_in() {
        let dt = parse_year_month_end_in("2000-02", "America/New_York").unwrap();
        assert_almost_midnight(dt, NEW_YORK, 2000, 2, 29);
        let dt = parse_year_month_end_in("2003-02", "America/Los_Angeles").unwrap();
        assert_almost_midnight(dt, LOS_ANGELES, 2003, 2, 28);
    }

    #[test]
    fn test_missing_timezone_is_configuration_error() {
        assert_eq!(
            parse_year_month_start_in("2019-01", ""),
            Err(IsoError::MissingTimezone("parse year month start"))
        );
        assert_eq!(
            parse_year_month_end_in("2019-01", ""),
            Err(IsoError::MissingTimezone("parse year month end"))
        );
    }
}
