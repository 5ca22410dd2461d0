//! Display formatting for incident data.
//!
//! Timestamps are rendered in UTC so the server-rendered markup and the
//! hydrated client agree regardless of the viewer's timezone. The backend may
//! send naive ISO strings (no offset); those are taken to already be UTC.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        return Some(aware.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `2025-03-01T10:15:00` → `2025-03-01 10:15:00 UTC`; unparseable input is echoed.
pub fn date_time(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Time-of-day portion (`10:15:00`); unparseable input is echoed.
pub fn time_of_day(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| ts.format("%H:%M:%S").to_string())
}

/// Two-decimal score, or `N/A` when the detector did not report one.
pub fn score(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "N/A".to_owned(),
    }
}
