//! Ordinal date rendering.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// Render a date as `1st Mar 2025`.
pub fn ordinal_date(date: Date) -> String {
    let day = date.day();
    let suffix = match (day % 10, day) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix} {}", date.strftime("%b %Y"))
}

/// A timestamp shown as an ordinal date in the system time zone.
pub struct OrdinalDate<'a>(pub &'a Timestamp);

impl fmt::Display for OrdinalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0.to_zoned(TimeZone::system()).date();
        f.write_str(&ordinal_date(date))
    }
}
