use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::{EntryPayload, normalize};
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `edit` command: partial update. Flags that were not given
/// fall back to the stored entry inside the normalizer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        code,
        start,
        end,
        text,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let user_id = store::ensure_user(&pool.conn, &cfg.user)?;

        let existing =
            store::fetch_entry(&pool.conn, *id, user_id)?.ok_or(AppError::EntryNotFound(*id))?;

        let payload = EntryPayload {
            charge_code_id: code.clone(),
            entry_date: date.clone(),
            start_time: start.clone(),
            end_time: end.clone(),
            activity_text: text.clone(),
        };

        let cleaned = normalize(user_id, &payload, Some(&existing), &pool.conn)?;
        store::update_entry(&pool.conn, *id, user_id, &cleaned)?;

        success(format!(
            "Entry #{} updated: {} {}-{} ({} min).",
            id,
            cleaned.entry_date,
            cleaned.start_time.format("%H:%M"),
            cleaned.end_time.format("%H:%M"),
            cleaned.duration_minutes
        ));
    }
    Ok(())
}
