//! Calendar date parsing and display.

use chrono::{NaiveDate, ParseResult};

/// Input format accepted for `/by` and `/at` dates.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format used when a date is shown alongside a task.
pub const DISPLAY_FORMAT: &str = "%b %-d %Y";

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Only the ISO ordering is accepted; relative phrases such as "tomorrow" fail.
pub fn parse_string_to_date(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), INPUT_FORMAT)
}

/// Format a date for display, e.g. `Mar 1 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
