use crate::errors::{AppError, AppResult};
use crate::models::time_entry::{NewTimeEntry, TimeEntry};
use crate::models::user::SessionUser;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str =
    "id, user_email, user_name, date, clock_in, break_start, break_end, clock_out, total_hours";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn timestamp_column(row: &Row, name: &str) -> Result<DateTime<Local>> {
    let raw: String = row.get(name)?;
    parse_timestamp(&raw).map_err(conversion_error)
}

fn optional_timestamp_column(row: &Row, name: &str) -> Result<Option<DateTime<Local>>> {
    let raw: Option<String> = row.get(name)?;
    raw.map(|s| parse_timestamp(&s).map_err(conversion_error))
        .transpose()
}

fn to_db_ts(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339()
}

fn opt_to_db_ts(ts: &Option<DateTime<Local>>) -> Option<String> {
    ts.as_ref().map(to_db_ts)
}

pub fn map_row(row: &Row) -> Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    Ok(TimeEntry {
        id: row.get("id")?,
        user_email: row.get("user_email")?,
        user_name: row.get("user_name")?,
        date,
        clock_in: timestamp_column(row, "clock_in")?,
        break_start: optional_timestamp_column(row, "break_start")?,
        break_end: optional_timestamp_column(row, "break_end")?,
        clock_out: optional_timestamp_column(row, "clock_out")?,
        total_hours: row.get("total_hours")?,
    })
}

fn collect(rows: impl Iterator<Item = Result<TimeEntry>>) -> AppResult<Vec<TimeEntry>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_entry(conn: &Connection, entry: &NewTimeEntry) -> AppResult<TimeEntry> {
    conn.execute(
        "INSERT INTO time_entries (user_email, user_name, date, clock_in, total_hours)
         VALUES (?1, ?2, ?3, ?4, 0)",
        params![
            entry.user_email,
            entry.user_name,
            entry.date.format("%Y-%m-%d").to_string(),
            to_db_ts(&entry.clock_in),
        ],
    )?;

    Ok(TimeEntry {
        id: conn.last_insert_rowid(),
        user_email: entry.user_email.clone(),
        user_name: entry.user_name.clone(),
        date: entry.date,
        clock_in: entry.clock_in,
        break_start: None,
        break_end: None,
        clock_out: None,
        total_hours: 0.0,
    })
}

/// Update the mutable fields of an entry (breaks, clock-out, total).
pub fn update_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE time_entries
         SET break_start = ?1, break_end = ?2,
             clock_out = ?3, total_hours = ?4
         WHERE id = ?5",
        params![
            opt_to_db_ts(&entry.break_start),
            opt_to_db_ts(&entry.break_end),
            opt_to_db_ts(&entry.clock_out),
            entry.total_hours,
            entry.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(entry.id));
    }
    Ok(())
}

/// The user's most recent entry without a clock-out, whatever its date.
pub fn load_latest_open_entry(conn: &Connection, email: &str) -> AppResult<Option<TimeEntry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM time_entries
         WHERE user_email = ?1 AND clock_out IS NULL
         ORDER BY clock_in DESC
         LIMIT 1"
    );
    Ok(conn.query_row(&sql, [email], map_row).optional()?)
}

pub fn load_entries_for_day(
    conn: &Connection,
    email: &str,
    date: &NaiveDate,
) -> AppResult<Vec<TimeEntry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM time_entries
         WHERE user_email = ?1 AND date = ?2
         ORDER BY clock_in ASC, id ASC"
    );
    let date_str = date.format("%Y-%m-%d").to_string();
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![email, date_str], map_row)?;
    collect(rows)
}

pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<TimeEntry>> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM time_entries ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;
    collect(rows)
}

// ---------------------------------------------------------------------------
// Session marker
// ---------------------------------------------------------------------------

pub fn load_session(conn: &Connection) -> AppResult<Option<SessionUser>> {
    let row = conn
        .query_row(
            "SELECT email, name, logged_in_at FROM session WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    match row {
        None => Ok(None),
        Some((email, name, raw_ts)) => Ok(Some(SessionUser {
            email,
            name,
            logged_in_at: parse_timestamp(&raw_ts)?,
        })),
    }
}

pub fn save_session(conn: &Connection, user: &SessionUser) -> AppResult<()> {
    conn.execute(
        "INSERT INTO session (id, email, name, logged_in_at)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
             email = excluded.email,
             name = excluded.name,
             logged_in_at = excluded.logged_in_at",
        params![user.email, user.name, to_db_ts(&user.logged_in_at)],
    )?;
    Ok(())
}

/// Remove the marker; returns whether one existed.
pub fn delete_session(conn: &Connection) -> AppResult<bool> {
    let removed = conn.execute("DELETE FROM session WHERE id = 1", [])?;
    Ok(removed > 0)
}
