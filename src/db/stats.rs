use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Counters shown by `db --info`.
#[derive(Debug, Default, PartialEq)]
pub struct DbStats {
    pub entries: i64,
    pub open_entries: i64,
    pub users: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub total_hours: f64,
}

pub fn collect_stats(pool: &DbPool) -> AppResult<DbStats> {
    let conn = &pool.conn;

    let (entries, open_entries, users, total_hours): (i64, i64, i64, f64) = conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(CASE WHEN clock_out IS NULL THEN 1 ELSE 0 END), 0),
                COUNT(DISTINCT user_email),
                COALESCE(SUM(total_hours), 0.0)
         FROM time_entries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
    )?;

    let first_date: Option<String> = conn
        .query_row(
            "SELECT date FROM time_entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT date FROM time_entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbStats {
        entries,
        open_entries,
        users,
        first_date,
        last_date,
        total_hours,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let stats = collect_stats(pool)?;

    println!(
        "{}• Time entries:{} {}{}{} ({} open)",
        CYAN, RESET, GREEN, stats.entries, RESET, stats.open_entries
    );
    println!("{}• Users:{} {}", CYAN, RESET, stats.users);
    println!("{}• Hours recorded:{} {:.2}", CYAN, RESET, stats.total_hours);

    let placeholder = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        stats.first_date.as_deref().unwrap_or(&placeholder)
    );
    println!(
        "    to:   {}",
        stats.last_date.as_deref().unwrap_or(&placeholder)
    );

    println!();
    Ok(())
}
