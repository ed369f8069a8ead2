//! Date and timestamp formatting.

use chrono::{DateTime, NaiveDate};
use nex_notion::types::DateValue;

const DATE_ONLY_LEN: usize = "2024-03-01".len();

/// Format a date or date range value.
///
/// A bare calendar date (`2024-03-01`) renders without a time component
/// (`Mar 1, 2024`); a full timestamp renders date and time, suffixed once
/// with the time zone label when the value carries one. Ranges join both
/// ends with an arrow. Unparseable input falls back to the raw string.
pub(crate) fn format_date_value(value: &DateValue) -> String {
    if value.start.len() == DATE_ONLY_LEN {
        let mut out = format_date(&value.start);
        if let Some(end) = &value.end {
            out.push_str(" → ");
            out.push_str(&format_date(end));
        }
        out
    } else {
        let mut out = format_timestamp(&value.start);
        if let Some(end) = &value.end {
            out.push_str(" → ");
            out.push_str(&format_timestamp(end));
        }
        if let Some(zone) = &value.time_zone {
            out.push_str(&format!(" ({zone})"));
        }
        out
    }
}

fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// Format an RFC 3339 timestamp as date plus wall-clock time, in the
/// timestamp's own offset.
pub(crate) fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => instant.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => raw.to_owned(),
    }
}
