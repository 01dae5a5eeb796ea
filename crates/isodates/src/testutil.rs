//! Shared assertions for the grammar test suites.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;

pub(crate) const NEW_YORK: Tz = chrono_tz::America::New_York;
pub(crate) const LOS_ANGELES: Tz = chrono_tz::America::Los_Angeles;

/// Assert that `dt` is exactly midnight on the given date in the given zone.
pub(crate) fn assert_midnight(dt: DateTime<Tz>, tz: Tz, year: i32, month: u32, day: u32) {
    assert_eq!(dt.timezone(), tz, "incorrect zone");
    assert_eq!(dt.year(), year, "incorrect year");
    assert_eq!(dt.month(), month, "incorrect month");
    assert_eq!(dt.day(), day, "incorrect day");
    assert_eq!(dt.hour(), 0, "incorrect hour");
    assert_eq!(dt.minute(), 0, "incorrect minute");
    assert_eq!(dt.second(), 0, "incorrect second");
    assert_eq!(dt.nanosecond(), 0, "incorrect nanos");
}

/// Assert that `dt` is exactly 23:59:59.999999999 on the given date in the
/// given zone.
pub(crate) fn assert_almost_midnight(dt: DateTime<Tz>, tz: Tz, year: i32, month: u32, day: u32) {
    assert_eq!(dt.timezone(), tz, "incorrect zone");
    assert_eq!(dt.year(), year, "incorrect year");
    assert_eq!(dt.month(), month, "incorrect month");
    assert_eq!(dt.day(), day, "incorrect day");
    assert_eq!(dt.hour(), 23, "incorrect hour");
    assert_eq!(dt.minute(), 59, "incorrect minute");
    assert_eq!(dt.second(), 59, "incorrect second");
    assert_eq!(dt.nanosecond(), 999_999_999, "incorrect nanos");
}
