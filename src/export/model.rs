// src/export/model.rs

use crate::models::time_entry::TimeEntry;
use serde::Serialize;

/// Flat export row; absent timestamps are empty.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub user_email: String,
    pub user_name: String,
    pub clock_in: String,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub clock_out: Option<String>,
    pub total_hours: f64,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            user_email: e.user_email.clone(),
            user_name: e.user_name.clone(),
            clock_in: e.clock_in.to_rfc3339(),
            break_start: e.break_start.map(|t| t.to_rfc3339()),
            break_end: e.break_end.map(|t| t.to_rfc3339()),
            clock_out: e.clock_out.map(|t| t.to_rfc3339()),
            total_hours: e.total_hours,
        }
    }
}
