//! Presentation helpers for fetched records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format an ISO-8601 timestamp as a short readable date.
///
/// `"2025-11-18T18:37:27.035511+00:00"` becomes `"Nov 18, 2025"`. Strings
/// that cannot be parsed are returned unchanged.
pub fn format_date(date_string: &str) -> String {
    match parse_date(date_string.trim()) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => date_string.to_string(),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// "1 Comment", "0 Comments", "12 Comments"
pub fn comment_count_label(count: u64) -> String {
    if count == 1 {
        "1 Comment".to_string()
    } else {
        format!("{} Comments", count)
    }
}
