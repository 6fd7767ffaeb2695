//! Plain-text rendering of ranges.
//!
//! Long form:  `Sunday, 10 Mar 2024 – Saturday, 16 Mar 2024 (7 days)`
//! ISO form:   `2024-03-10 2024-03-16`

use chrono::NaiveDate;

use crate::date_range::DateRange;

/// Formats a date according to the user's configuration.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

/// `2024-03-10 2024-03-16`, the two values written into the form.
pub fn format_iso_line(range: &DateRange) -> String {
    let (start, end) = range.to_iso();
    format!("{start} {end}")
}

pub fn format_long(range: &DateRange, date_format: &str) -> String {
    let days = range.len_days();
    let unit = if days == 1 { "day" } else { "days" };
    if range.start() == range.end() {
        format!("{} ({days} {unit})", format_date(range.start(), date_format))
    } else {
        format!(
            "{} – {} ({days} {unit})",
            format_date(range.start(), date_format),
            format_date(range.end(), date_format)
        )
    }
}
