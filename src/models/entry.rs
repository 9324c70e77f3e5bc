use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Read-side view of a stored time entry, enriched with its charge-code
/// label ("{project}-{task} {description}"). Built fresh on every read,
/// never persisted; `duration_minutes` is derived from the times before
/// storage and never trusted from input.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub id: i64,
    pub charge_code_id: i64,
    pub charge_code_label: String,
    pub entry_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: i64,
    pub activity_text: String,
}

impl EntryView {
    pub fn date_str(&self) -> String {
        self.entry_date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}
