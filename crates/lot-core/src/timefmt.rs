//! Fixed, locale-independent timestamp rendering.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Layout of the classic `ctime` string, e.g. `Fri Mar  1 09:00:00 2024`.
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Render `at` in its own time zone using [`CTIME_FORMAT`], with no trailing newline.
#[must_use]
pub fn ctime<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(CTIME_FORMAT).to_string()
}
