//! Week window math: map an anchor date to the bounding 7-day window of
//! the configured week-start weekday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The reporting week starts on Thursday unless configured otherwise.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Thu;

/// Bounding week window for an anchor date: the most recent occurrence of
/// `week_start` (possibly the anchor itself) through the following 6 days.
/// Total over all valid dates.
pub fn week_bounds(anchor: NaiveDate, week_start: Weekday) -> (NaiveDate, NaiveDate) {
    // Monday=0 … Sunday=6 numbering
    let days_back =
        (anchor.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    let start = anchor - Duration::days(days_back as i64);
    let end = start + Duration::days(6);
    (start, end)
}

/// The 7 dates of the window, in order.
pub fn week_days(week_start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| week_start + Duration::days(i)).collect()
}

/// Parse a week-start weekday from its configuration spelling.
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    match value.trim().to_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
