use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::store;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its schema
///  - the acting user profile
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load()?;
    cfg.database = db_path.to_string_lossy().to_string();
    if let Some(user) = &cli.user {
        cfg.user = user.clone();
    }

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;
    store::ensure_user(&conn, &cfg.user)?;

    println!("Config file : {}", Config::config_file().display());
    println!("Database    : {}", &cfg.database);
    println!("User        : {}", &cfg.user);
    success("chargelog initialized.");
    Ok(())
}
