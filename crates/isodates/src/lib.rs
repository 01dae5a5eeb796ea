//! # isodates
//!
//! Strict parsing for the ISO 8601 calendar grammars — plain dates,
//! date-times, year/month, month/day, ISO weeks, and ISO week-days — plus
//! projection of the parsed values to start-of-period and end-of-period
//! timestamps in an explicit time zone.
//!
//! Each grammar is recognized by direct length and separator checks rather
//! than a general parser, so zero-padding rules are exact (a 1-digit year is
//! rejected, never coerced) and the hot formats stay fast. Overflow day
//! values are deliberate, documented behavior: `"2005-02-29"` rolls forward
//! to March 1 2005, and `"--05-32"` is June 1.
//!
//! All functions are pure and synchronous; every result is a freshly
//! constructed value, and every failure is a typed [`IsoError`]. Time zones
//! are always explicit — the plain operations use literal UTC, the `*_in`
//! operations take an IANA zone name and fail if it is empty.
//!
//! ## Modules
//!
//! - [`date`] — `YYYY-MM-DD` calendar dates
//! - [`datetime`] — full RFC 3339 date-times
//! - [`year_month`] — `YYYY-MM`, with the signed `[+|-]YYYY-MM` variant
//! - [`month_day`] — `--MM-DD`, with optional padding and day rollover
//! - [`week`] — `YYYY-Www` ISO weeks
//! - [`week_day`] — `YYYY-Www-D` ISO week-days
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use isodates::{parse_date, parse_week_start};
//!
//! let date = parse_date("2019-05-22").unwrap();
//! assert_eq!((date.year, date.month, date.day), (2019, 5, 22));
//!
//! // ISO week 1 of 2019 starts in Gregorian 2018
//! let monday = parse_week_start("2019-W01").unwrap();
//! assert_eq!(monday.to_rfc3339(), "2018-12-31T00:00:00+00:00");
//! ```

pub mod date;
pub mod datetime;
pub mod error;
pub mod month_day;
pub mod week;
pub mod week_day;
pub mod year_month;

mod fields;
mod normalize;
mod project;

#[cfg(test)]
mod testutil;

pub use date::{
    parse_date, parse_date_end, parse_date_end_in, parse_date_start, parse_date_start_in,
    CalendarDate,
};
pub use datetime::parse_date_time;
pub use error::{IsoError, Result};
pub use month_day::{
    parse_month_day, parse_month_day_end, parse_month_day_end_in, parse_month_day_start,
    parse_month_day_start_in, MonthDay,
};
pub use week::{
    parse_week, parse_week_end, parse_week_end_in, parse_week_start, parse_week_start_in, IsoWeek,
};
pub use week_day::{
    parse_week_day, parse_week_day_end, parse_week_day_end_in, parse_week_day_start,
    parse_week_day_start_in, IsoWeekDate,
};
pub use year_month::{
    parse_year_month, parse_year_month_end, parse_year_month_end_in, parse_year_month_start,
    parse_year_month_start_in, YearMonth,
};
