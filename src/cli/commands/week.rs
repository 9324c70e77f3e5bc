use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::overview::aggregate;
use crate::core::week::{week_bounds, week_days};
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::table::{Column, Table};

/// Handle the `week` command: the charge-code × day hours matrix for the
/// week containing the anchor date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date: anchor } = cmd {
        let anchor_date = date::parse_anchor(anchor.as_ref())?;
        let (week_start, week_end) = week_bounds(anchor_date, cfg.week_start_weekday()?);

        let pool = DbPool::new(&cfg.database)?;
        let user_id = store::ensure_user(&pool.conn, &cfg.user)?;
        let entries = store::fetch_entries(&pool.conn, user_id, week_start, week_end)?;

        let overview = aggregate(&entries, week_start, week_end);

        println!(
            "Week {} .. {} ({})",
            date::iso(week_start),
            date::iso(week_end),
            cfg.user
        );
        println!();

        if overview.rows.is_empty() {
            info("No entries this week.");
            return Ok(());
        }

        let mut columns = vec![Column::left("CHARGE CODE")];
        for day in week_days(week_start) {
            columns.push(Column::right(&day.format("%a %d").to_string()));
        }
        columns.push(Column::right("TOTAL"));

        let mut table = Table::new(columns);
        for row in &overview.rows {
            let mut cells = vec![row.label.clone()];
            for cell in &row.cells {
                cells.push(if cell.hours == 0.0 && cell.comments.is_empty() {
                    "-".to_string()
                } else {
                    format!("{:.2}", cell.hours)
                });
            }
            cells.push(format!("{:.2}", row.total_hours));
            table.add_row(cells);
        }

        let mut totals = vec!["TOTAL".to_string()];
        for t in &overview.day_totals {
            totals.push(format!("{:.2}", t));
        }
        totals.push(format!("{:.2}", overview.week_total));
        table.add_row(totals);

        print!("{}", table.render());
    }
    Ok(())
}
