use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::{EntryPayload, normalize};
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `add` command: every field flows through the normalizer,
/// which recomputes the duration and checks charge-code ownership.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        code,
        start,
        end,
        text,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let user_id = store::ensure_user(&pool.conn, &cfg.user)?;

        let payload = EntryPayload {
            charge_code_id: Some(code.clone()),
            entry_date: Some(date.clone()),
            start_time: Some(start.clone()),
            end_time: Some(end.clone()),
            activity_text: Some(text.clone()),
        };

        let cleaned = normalize(user_id, &payload, None, &pool.conn)?;
        let entry_id = store::insert_entry(&pool.conn, user_id, &cleaned)?;

        success(format!(
            "Entry #{} added: {} {}-{} ({} min).",
            entry_id,
            cleaned.entry_date,
            cleaned.start_time.format("%H:%M"),
            cleaned.end_time.format("%H:%M"),
            cleaned.duration_minutes
        ));
    }
    Ok(())
}
