//! Time-of-day arithmetic: strict HH:MM parsing, minutes-since-midnight
//! conversions, duration computation and display formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

// chrono's %H accepts single-digit hours; entries must be zero-padded 24h.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

/// Parse a strict zero-padded 24-hour "HH:MM" string.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    if !TIME_RE.is_match(value) {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Minutes since midnight for a time-of-day value.
pub fn minutes_of_day(t: NaiveTime) -> i64 {
    t.hour() as i64 * 60 + t.minute() as i64
}

/// Parse "HH:MM" and convert to minutes since midnight.
pub fn time_to_minutes(value: &str) -> AppResult<i64> {
    let t = parse_time(value).ok_or_else(|| AppError::InvalidTime(value.to_string()))?;
    Ok(minutes_of_day(t))
}

/// Format a minute count as zero-padded "HH:MM".
/// No day-rollover normalization: 1500 renders as "25:00".
pub fn minutes_to_label(total_minutes: i64) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Format a minute-of-day value on a 12-hour clock with AM/PM suffix.
/// Hours 0 and 12 both render as 12.
pub fn minutes_to_ampm(total_minutes: i64) -> String {
    let hours = total_minutes / 60;
    let mins = total_minutes % 60;
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let hour12 = if hours % 12 == 0 { 12 } else { hours % 12 };
    format!("{}:{:02} {}", hour12, mins, suffix)
}

/// Duration in minutes between two same-day times.
/// The caller guarantees start < end; no ordering check happens here.
pub fn duration_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    minutes_of_day(end) - minutes_of_day(start)
}
