use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let user_id = store::ensure_user(&pool.conn, &cfg.user)?;

        let deleted = store::delete_entry(&pool.conn, *id, user_id)?;
        if deleted == 0 {
            return Err(AppError::EntryNotFound(*id));
        }

        success(format!("Entry #{} deleted.", id));
    }
    Ok(())
}
