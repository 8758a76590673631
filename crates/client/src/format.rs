//! Display helpers for timestamps coming from the API.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse an API timestamp. The API sends RFC 3339, older rows come back as
/// plain `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// "just now", "5 min ago", "3 h ago", then the calendar date.
pub fn relative_time(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if elapsed.num_hours() < 24 {
        format!("{} h ago", elapsed.num_hours())
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

/// Relative time against the current clock.
pub fn time_ago(raw: &str) -> String {
    relative_time(raw, Utc::now())
}

/// Date and time for message bubbles and post details.
pub fn date_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}
