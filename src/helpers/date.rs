//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "DD MMM YYYY") // -> "15 Mar 2021"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format a nullable publication date, or empty when there is none
pub fn format_optional<Tz: TimeZone>(date: Option<&DateTime<Tz>>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.map(|d| format_date(d, format)).unwrap_or_default()
}

/// Convert a Moment.js format string to a chrono format string
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each category so substrings do not
    // clobber each other
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}
