//! Storage collaborator for the engine: entry and charge-code queries.
//! Read-side queries return `EntryView` rows already joined with their
//! charge code and sorted the way the projector and aggregator expect.

use crate::core::normalize::{ChargeCodeLookup, NormalizedEntry};
use crate::errors::{AppError, AppResult};
use crate::models::charge_code::ChargeCode;
use crate::models::entry::EntryView;
use chrono::{NaiveDate, NaiveTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn now_utc() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn map_entry_row(row: &Row) -> Result<EntryView> {
    let date_str: String = row.get("entry_date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let entry_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start_time = NaiveTime::parse_from_str(&start_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(start_str.clone())),
        )
    })?;

    let end_time = NaiveTime::parse_from_str(&end_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(end_str.clone())),
        )
    })?;

    let project: String = row.get("project_number")?;
    let task: String = row.get("task_number")?;
    let description: String = row.get("description")?;

    Ok(EntryView {
        id: row.get("id")?,
        charge_code_id: row.get("charge_code_id")?,
        charge_code_label: format!("{}-{} {}", project, task, description),
        entry_date,
        start_time,
        end_time,
        duration_minutes: row.get("duration_minutes")?,
        activity_text: row.get("activity_text")?,
    })
}

fn map_charge_code_row(row: &Row) -> Result<ChargeCode> {
    Ok(ChargeCode {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        project_number: row.get("project_number")?,
        task_number: row.get("task_number")?,
        description: row.get("description")?,
        is_active: row.get::<_, i64>("is_active")? != 0,
    })
}

// ---------------------------
// Users
// ---------------------------

/// Look up a user profile by name, creating it on first use.
pub fn ensure_user(conn: &Connection, name: &str) -> AppResult<i64> {
    let existing: Option<i64> = conn
        .query_row("SELECT id FROM users WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO users (name, created_at) VALUES (?1, ?2)",
        params![name, now_utc()],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Charge codes
// ---------------------------

/// All charge codes for a user, sorted by (project number, task number).
/// The color-assignment policy depends on this sort order.
pub fn list_charge_codes(conn: &Connection, user_id: i64) -> AppResult<Vec<ChargeCode>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, project_number, task_number, description, is_active
         FROM charge_codes
         WHERE user_id = ?1
         ORDER BY project_number, task_number",
    )?;

    let rows = stmt.query_map([user_id], map_charge_code_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn owns_charge_code(conn: &Connection, user_id: i64, charge_code_id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM charge_codes WHERE id = ?1 AND user_id = ?2")?;
    Ok(stmt.exists(params![charge_code_id, user_id])?)
}

pub fn charge_code_exists(
    conn: &Connection,
    user_id: i64,
    project_number: &str,
    task_number: &str,
) -> AppResult<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM charge_codes
         WHERE user_id = ?1 AND project_number = ?2 AND task_number = ?3",
    )?;
    Ok(stmt.exists(params![user_id, project_number, task_number])?)
}

pub fn insert_charge_code(
    conn: &Connection,
    user_id: i64,
    project_number: &str,
    task_number: &str,
    description: &str,
    is_active: bool,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO charge_codes (user_id, project_number, task_number, description, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            project_number,
            task_number,
            description,
            is_active as i64
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_charge_code_active(
    conn: &Connection,
    user_id: i64,
    charge_code_id: i64,
    active: bool,
) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE charge_codes SET is_active = ?1 WHERE id = ?2 AND user_id = ?3",
        params![active as i64, charge_code_id, user_id],
    )?;
    Ok(changed)
}

// ---------------------------
// Time entries
// ---------------------------

/// Entries for a user within a date range, joined with their charge code,
/// sorted by date then start time ascending.
pub fn fetch_entries(
    conn: &Connection,
    user_id: i64,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> AppResult<Vec<EntryView>> {
    let mut stmt = conn.prepare(
        "SELECT te.id, te.charge_code_id, te.entry_date, te.start_time, te.end_time,
                te.duration_minutes, te.activity_text,
                cc.project_number, cc.task_number, cc.description
         FROM time_entries te
         JOIN charge_codes cc ON cc.id = te.charge_code_id
         WHERE te.user_id = ?1 AND te.entry_date BETWEEN ?2 AND ?3
         ORDER BY te.entry_date ASC, te.start_time ASC",
    )?;

    let rows = stmt.query_map(
        params![
            user_id,
            date_from.format("%Y-%m-%d").to_string(),
            date_to.format("%Y-%m-%d").to_string(),
        ],
        map_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn fetch_entry(conn: &Connection, entry_id: i64, user_id: i64) -> AppResult<Option<EntryView>> {
    let mut stmt = conn.prepare(
        "SELECT te.id, te.charge_code_id, te.entry_date, te.start_time, te.end_time,
                te.duration_minutes, te.activity_text,
                cc.project_number, cc.task_number, cc.description
         FROM time_entries te
         JOIN charge_codes cc ON cc.id = te.charge_code_id
         WHERE te.id = ?1 AND te.user_id = ?2",
    )?;

    let mut rows = stmt.query_map(params![entry_id, user_id], map_entry_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn insert_entry(conn: &Connection, user_id: i64, entry: &NormalizedEntry) -> AppResult<i64> {
    let now = now_utc();
    conn.execute(
        "INSERT INTO time_entries
         (user_id, charge_code_id, entry_date, start_time, end_time, duration_minutes, activity_text, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user_id,
            entry.charge_code_id,
            entry.entry_date.format("%Y-%m-%d").to_string(),
            entry.start_time.format("%H:%M").to_string(),
            entry.end_time.format("%H:%M").to_string(),
            entry.duration_minutes,
            entry.activity_text,
            now,
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_entry(
    conn: &Connection,
    entry_id: i64,
    user_id: i64,
    entry: &NormalizedEntry,
) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE time_entries
         SET charge_code_id = ?1, entry_date = ?2, start_time = ?3, end_time = ?4,
             duration_minutes = ?5, activity_text = ?6, updated_at = ?7
         WHERE id = ?8 AND user_id = ?9",
        params![
            entry.charge_code_id,
            entry.entry_date.format("%Y-%m-%d").to_string(),
            entry.start_time.format("%H:%M").to_string(),
            entry.end_time.format("%H:%M").to_string(),
            entry.duration_minutes,
            entry.activity_text,
            now_utc(),
            entry_id,
            user_id,
        ],
    )?;
    Ok(changed)
}

pub fn delete_entry(conn: &Connection, entry_id: i64, user_id: i64) -> AppResult<usize> {
    let changed = conn.execute(
        "DELETE FROM time_entries WHERE id = ?1 AND user_id = ?2",
        params![entry_id, user_id],
    )?;
    Ok(changed)
}

/// The normalizer's ownership probe, backed by the charge_codes table.
impl ChargeCodeLookup for Connection {
    fn owns_charge_code(&self, user_id: i64, charge_code_id: i64) -> AppResult<bool> {
        owns_charge_code(self, user_id, charge_code_id)
    }
}
