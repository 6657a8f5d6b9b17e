//! Time utilities: parsing user input and stored timestamps, hour arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_date(d: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(d.to_string()))
}

/// Parse a stored RFC 3339 timestamp into local time.
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

fn local_from_naive(naive: NaiveDateTime, raw: &str) -> AppResult<DateTime<Local>> {
    naive
        .and_local_timezone(Local)
        .single()
        .ok_or_else(|| AppError::InvalidTimestamp(format!("{raw} (ambiguous or skipped local time)")))
}

/// Resolve the `--at` option of the clock commands.
///
/// - `None` → `now`
/// - `HH:MM` → that time on `now`'s day
/// - `YYYY-MM-DD HH:MM` → that local instant
pub fn parse_at(input: Option<&str>, now: DateTime<Local>) -> AppResult<DateTime<Local>> {
    let Some(raw) = input.map(str::trim) else {
        return Ok(now);
    };

    if let Some(t) = parse_time(raw) {
        return local_from_naive(now.date_naive().and_time(t), raw);
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(raw.to_string()))?;

    local_from_naive(naive, raw)
}

/// Fractional hours from `start` to `end`.
pub fn hours_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Round to two decimals.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
