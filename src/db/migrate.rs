//! Schema creation and upgrades. Everything the rest of the db layer
//! assumes about the schema is guaranteed here.

use rusqlite::{Connection, OptionalExtension, Result};

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let found: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(found.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT UNIQUE NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_charge_codes_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS charge_codes (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER NOT NULL,
            project_number TEXT NOT NULL,
            task_number    TEXT NOT NULL,
            description    TEXT NOT NULL DEFAULT '',
            is_active      INTEGER NOT NULL DEFAULT 1,
            UNIQUE(user_id, project_number, task_number),
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
        );
        "#,
    )?;
    Ok(())
}

fn create_time_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id          INTEGER NOT NULL,
            charge_code_id   INTEGER NOT NULL,
            entry_date       TEXT NOT NULL,
            start_time       TEXT NOT NULL,
            end_time         TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL,
            activity_text    TEXT NOT NULL,
            created_at       TEXT NOT NULL,
            updated_at       TEXT NOT NULL,
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY(charge_code_id) REFERENCES charge_codes(id) ON DELETE CASCADE
        );
        "#,
    )?;
    Ok(())
}

/// Bring an existing database up to the current schema.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    create_users_table(conn)?;
    create_charge_codes_table(conn)?;
    create_time_entries_table(conn)?;

    // databases created before charge codes could be deactivated
    if table_exists(conn, "charge_codes")? && !has_column(conn, "charge_codes", "is_active")? {
        conn.execute_batch(
            "ALTER TABLE charge_codes ADD COLUMN is_active INTEGER NOT NULL DEFAULT 1;",
        )?;
    }

    Ok(())
}
