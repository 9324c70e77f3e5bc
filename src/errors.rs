//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Validation failures produced while normalizing an entry payload.
/// Fail-fast: the normalizer stops at the first failure and surfaces
/// exactly one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields.")]
    MissingFields,

    #[error("Invalid payload: {0}")]
    Parse(String),

    #[error("Start time must be before end time.")]
    StartNotBeforeEnd,

    #[error("Activity text is required.")]
    EmptyActivity,

    #[error("Invalid charge code.")]
    ChargeCodeNotOwned,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("{0} is required")]
    MissingValue(&'static str),

    #[error("Charge code already exists: {0}")]
    DuplicateChargeCode(String),

    #[error("Charge code not found: {0}")]
    ChargeCodeNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
