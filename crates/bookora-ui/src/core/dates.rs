//! Parsing for `date` / `datetime-local` input values.

use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an input value. Bare dates resolve to midnight.
#[must_use]
pub fn parse_input_value(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Whether `end` fails to come strictly after `start`.
///
/// Values that do not parse never conflict; the browser owns their validation.
#[must_use]
pub fn end_not_after_start(start: &str, end: &str) -> bool {
    match (parse_input_value(start), parse_input_value(end)) {
        (Some(start), Some(end)) => end <= start,
        _ => false,
    }
}
