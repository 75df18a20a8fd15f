//! Timestamp formatting helpers.
//!
//! Absolute formatting uses two fixed patterns (`YYYY.MM.DD` and
//! `YYYY-MM-DD HH:mm:ss`) that consumers depend on byte-for-byte. Relative
//! formatting produces phrases like "3 hours ago". Parsing is lenient and
//! never fails: input that no accepted format matches renders as the
//! literal `"Invalid Date"`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Rendering of timestamps that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%Y.%m.%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp string into a naive date-time.
///
/// Accepted formats, tried in order: RFC 3339 (offset dropped, wall clock
/// taken in UTC), `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, and a bare
/// `YYYY-MM-DD` (midnight).
fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let timestamp = timestamp.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, DATE_TIME_FORMAT) {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d") {
        return Some(parsed.and_time(NaiveTime::MIN));
    }

    None
}

/// Format a timestamp as `YYYY.MM.DD`.
///
/// Unparsable input yields `"Invalid Date"`.
#[must_use]
pub fn format_date(timestamp: &str) -> String {
    parse_timestamp(timestamp).map_or_else(
        || INVALID_DATE.to_string(),
        |parsed| parsed.format(DATE_FORMAT).to_string(),
    )
}

/// Format a timestamp as `YYYY-MM-DD HH:mm:ss`.
///
/// Unparsable input yields `"Invalid Date"`.
#[must_use]
pub fn format_date_time(timestamp: &str) -> String {
    parse_timestamp(timestamp).map_or_else(
        || INVALID_DATE.to_string(),
        |parsed| parsed.format(DATE_TIME_FORMAT).to_string(),
    )
}

/// Format a timestamp relative to the current moment ("3 hours ago").
///
/// Unparsable input yields `"Invalid Date"`.
#[must_use]
pub fn from_now(timestamp: &str) -> String {
    parse_timestamp(timestamp).map_or_else(
        || INVALID_DATE.to_string(),
        |then| relative_between(then, Utc::now().naive_utc()),
    )
}

/// Express `then` relative to `now` as a human phrase.
///
/// Pure in both arguments, so repeated calls with a fixed `now` are
/// reproducible. Bucket boundaries follow the usual relative-time table:
/// under 45 seconds is "a few seconds", under 90 "a minute", then rounded
/// minute/hour/day/month/year buckets. Instants after `now` render as
/// "in 3 hours" instead of "3 hours ago".
#[must_use]
pub fn relative_between(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let delta = now.signed_duration_since(then);
    let future = delta.num_seconds() < 0;
    let secs = delta.num_seconds().abs();

    // Each coarser unit is rounded, not truncated, so 100 minutes is
    // "2 hours" rather than "1 hours".
    let mins = (secs + 30) / 60;
    let hours = (mins + 30) / 60;
    let days = (hours + 12) / 24;
    let months = (days * 10 + 152) / 304;
    let years = (months + 6) / 12;

    let phrase = if secs < 45 {
        "a few seconds".to_string()
    } else if secs < 90 {
        "a minute".to_string()
    } else if mins < 45 {
        format!("{mins} minutes")
    } else if mins < 90 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{hours} hours")
    } else if hours < 36 {
        "a day".to_string()
    } else if days < 26 {
        format!("{days} days")
    } else if days < 46 {
        "a month".to_string()
    } else if days < 320 {
        format!("{months} months")
    } else if months < 18 {
        "a year".to_string()
    } else {
        format!("{years} years")
    };

    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}
