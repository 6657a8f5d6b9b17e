use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
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

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `time_entries` table.
fn create_time_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_email   TEXT NOT NULL,
            user_name    TEXT NOT NULL,
            date         TEXT NOT NULL,
            clock_in     TEXT NOT NULL,
            break_start  TEXT,
            break_end    TEXT,
            clock_out    TEXT,
            total_hours  REAL NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_date ON time_entries(user_email, date);
        "#,
    )?;
    Ok(())
}

/// Create the single-row `session` table holding the logged-in marker.
fn create_session_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session (
            id            INTEGER PRIMARY KEY CHECK(id = 1),
            email         TEXT NOT NULL,
            name          TEXT NOT NULL,
            logged_in_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run `sql` once, marking `version` as applied in the log table.
fn apply_migration(conn: &Connection, version: &str, message: &str, sql: &str) -> AppResult<()> {
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(sql)
        .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "time_entries")? {
        create_time_entries_table(conn)?;
        success("Created time_entries table.");
    }

    if !table_exists(conn, "session")? {
        create_session_table(conn)?;
        success("Created session table.");
    }

    // At most one open entry per user and day.
    apply_migration(
        conn,
        "20250601_0001_unique_open_entry",
        "Added unique index on open time entries",
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_one_open
            ON time_entries(user_email, date)
            WHERE clock_out IS NULL;
        "#,
    )?;

    apply_migration(
        conn,
        "20250614_0002_entries_date_index",
        "Added date index for reports",
        "CREATE INDEX IF NOT EXISTS idx_entries_date ON time_entries(date DESC, clock_in DESC);",
    )?;

    Ok(())
}
