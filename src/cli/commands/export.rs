use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::overview::aggregate;
use crate::core::week::week_bounds;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, json};
use crate::ui::messages::success;
use crate::utils::date;

/// Handle the `export` command: write the weekly overview to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date: anchor,
    } = cmd
    {
        let anchor_date = date::parse_anchor(anchor.as_ref())?;
        let (week_start, week_end) = week_bounds(anchor_date, cfg.week_start_weekday()?);

        let pool = DbPool::new(&cfg.database)?;
        let user_id = store::ensure_user(&pool.conn, &cfg.user)?;
        let entries = store::fetch_entries(&pool.conn, user_id, week_start, week_end)?;

        let overview = aggregate(&entries, week_start, week_end);

        match format {
            ExportFormat::Csv => csv::write_overview_csv(file, &overview)?,
            ExportFormat::Json => json::write_overview_json(file, &overview)?,
        }

        success(format!(
            "Week {} .. {} exported to {}.",
            date::iso(week_start),
            date::iso(week_end),
            file
        ));
    }
    Ok(())
}
