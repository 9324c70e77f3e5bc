//! Calendar-date helpers: strict YYYY-MM-DD parsing and today's date.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a strict "YYYY-MM-DD" date string.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Anchor date for the week commands: the given date, or today.
pub fn parse_anchor(value: Option<&String>) -> AppResult<NaiveDate> {
    match value {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}
