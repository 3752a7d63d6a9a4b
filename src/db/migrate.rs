//! Schema migration engine.
//! Every table the crate uses is created and upgraded here; no other
//! module issues CREATE TABLE statements.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the key/value record table.
///
/// One row per key; the value is the JSON form of the stored record.
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the append-only list table.
///
/// `position` is assigned at append time and unique within a list;
/// rows are never updated or deleted once committed.
fn create_list_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS list_entries (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            list     TEXT NOT NULL,
            position INTEGER NOT NULL,
            payload  TEXT NOT NULL,
            UNIQUE(list, position)
        );

        CREATE INDEX IF NOT EXISTS idx_list_entries_list ON list_entries(list, position);
        "#,
    )?;
    Ok(())
}

/// Run all pending migrations, oldest first. Safe to call on every start:
/// each step is a no-op when the schema is already current.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let had_records = table_exists(conn, "records")?;
    let had_lists = table_exists(conn, "list_entries")?;

    create_records_table(conn)?;
    create_list_entries_table(conn)?;

    if !had_records || !had_lists {
        success("Database schema created.");
        // Audit the migration; failure to log must not fail the migration.
        let _ = crate::db::log::ttlog(
            conn,
            "migration_applied",
            "schema",
            "Created records and list_entries tables",
        );
    }

    Ok(())
}
