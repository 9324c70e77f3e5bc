use crate::core::overview::WeekOverview;
use crate::errors::{AppError, AppResult};
use std::fs::File;

/// Write the week overview to a JSON file (pretty-printed).
pub fn write_overview_json(path: &str, overview: &WeekOverview) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, overview).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
