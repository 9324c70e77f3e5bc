//! Entry payload normalization: validates a create/update request (partial
//! or full) into a canonical entry, falling back to the existing record for
//! omitted fields.

use crate::core::clock;
use crate::errors::{AppResult, ValidationError};
use crate::models::entry::EntryView;
use crate::utils::date;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Canonical inbound record for entry create/update requests.
/// Presentation adapters (CLI flags, a JSON body, form data) all reduce to
/// this shape before calling [`normalize`]. A blank string and an absent
/// field are treated identically: both fall back to the existing record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryPayload {
    pub charge_code_id: Option<String>,
    pub entry_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub activity_text: Option<String>,
}

/// Output of a successful normalization, ready for insert/update.
/// `duration_minutes` is always recomputed here, never taken from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub charge_code_id: i64,
    pub entry_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: i64,
    pub activity_text: String,
}

/// Charge-code existence/ownership probe, injected by the storage layer
/// (implemented for `rusqlite::Connection` in `db::store`, stubbed in tests).
pub trait ChargeCodeLookup {
    fn owns_charge_code(&self, user_id: i64, charge_code_id: i64) -> AppResult<bool>;
}

fn resolve(value: &Option<String>, fallback: Option<String>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => fallback,
    }
}

/// Validate and normalize `payload` for `owner_id`, using `existing` as the
/// fallback source for omitted (or blank) fields.
///
/// Fail-fast: stops at the first violation. No side effects, no persistence.
pub fn normalize(
    owner_id: i64,
    payload: &EntryPayload,
    existing: Option<&EntryView>,
    codes: &impl ChargeCodeLookup,
) -> AppResult<NormalizedEntry> {
    let charge_code_raw = resolve(
        &payload.charge_code_id,
        existing.map(|e| e.charge_code_id.to_string()),
    );
    let entry_date_raw = resolve(&payload.entry_date, existing.map(|e| e.date_str()));
    let start_time_raw = resolve(&payload.start_time, existing.map(|e| e.start_str()));
    let end_time_raw = resolve(&payload.end_time, existing.map(|e| e.end_str()));
    let activity_text = resolve(
        &payload.activity_text,
        Some(existing.map(|e| e.activity_text.clone()).unwrap_or_default()),
    )
    .unwrap_or_default();

    let (Some(charge_code_raw), Some(entry_date_raw), Some(start_time_raw), Some(end_time_raw)) =
        (charge_code_raw, entry_date_raw, start_time_raw, end_time_raw)
    else {
        return Err(ValidationError::MissingFields.into());
    };

    let charge_code_id: i64 = charge_code_raw
        .parse()
        .map_err(|_| ValidationError::Parse(charge_code_raw.clone()))?;
    let entry_date = date::parse_date(&entry_date_raw)
        .ok_or_else(|| ValidationError::Parse(entry_date_raw.clone()))?;
    let start_time = clock::parse_time(&start_time_raw)
        .ok_or_else(|| ValidationError::Parse(start_time_raw.clone()))?;
    let end_time = clock::parse_time(&end_time_raw)
        .ok_or_else(|| ValidationError::Parse(end_time_raw.clone()))?;

    if start_time >= end_time {
        return Err(ValidationError::StartNotBeforeEnd.into());
    }

    let activity_text = activity_text.trim().to_string();
    if activity_text.is_empty() {
        return Err(ValidationError::EmptyActivity.into());
    }

    if !codes.owns_charge_code(owner_id, charge_code_id)? {
        return Err(ValidationError::ChargeCodeNotOwned.into());
    }

    Ok(NormalizedEntry {
        charge_code_id,
        entry_date,
        start_time,
        end_time,
        duration_minutes: clock::duration_minutes(start_time, end_time),
        activity_text,
    })
}
