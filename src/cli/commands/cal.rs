use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{assign_colors, project};
use crate::core::clock;
use crate::core::week::{week_bounds, week_days};
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::utils::colors::{BOLD, GREY, RESET};
use crate::utils::date;

/// Handle the `cal` command: per-day calendar cells for the week containing
/// the anchor date, clipped to the configured display window.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cal { date: anchor } = cmd {
        let anchor_date = date::parse_anchor(anchor.as_ref())?;
        let (week_start, week_end) = week_bounds(anchor_date, cfg.week_start_weekday()?);
        let window = cfg.window()?;

        let pool = DbPool::new(&cfg.database)?;
        let user_id = store::ensure_user(&pool.conn, &cfg.user)?;
        let entries = store::fetch_entries(&pool.conn, user_id, week_start, week_end)?;
        let codes = store::list_charge_codes(&pool.conn, user_id)?;

        let grouped = project(&entries, &assign_colors(&codes), &window);

        println!(
            "Week {} .. {}  (window {}-{})",
            date::iso(week_start),
            date::iso(week_end),
            clock::minutes_to_ampm(window.start_minutes),
            clock::minutes_to_ampm(window.end_minutes)
        );

        for day in week_days(week_start) {
            println!();
            println!("{}{}{}", BOLD, day.format("%A %Y-%m-%d"), RESET);

            let Some(cells) = grouped.get(&day).filter(|c| !c.is_empty()) else {
                println!("  {}(nothing in window){}", GREY, RESET);
                continue;
            };

            for cell in cells {
                let clipped = cell.start_minutes < window.start_minutes
                    || cell.end_minutes > window.end_minutes;
                println!(
                    "  {}■{} {:>8}-{:<8} {}  {}{}",
                    cell.color,
                    RESET,
                    clock::minutes_to_ampm(cell.start_minutes),
                    clock::minutes_to_ampm(cell.end_minutes),
                    cell.charge_code_label,
                    cell.activity_text,
                    if clipped {
                        format!(" {}(clipped){}", GREY, RESET)
                    } else {
                        String::new()
                    }
                );
            }
        }
    }
    Ok(())
}
