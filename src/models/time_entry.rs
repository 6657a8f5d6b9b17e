use super::clock_status::ClockStatus;
use super::user::SessionUser;
use chrono::{DateTime, Local, NaiveDate};

/// One clock-in/out record.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: i64,                             // ⇔ time_entries.id
    pub user_email: String,                  // ⇔ time_entries.user_email
    pub user_name: String,                   // ⇔ time_entries.user_name
    pub date: NaiveDate,                     // ⇔ time_entries.date (TEXT "YYYY-MM-DD")
    pub clock_in: DateTime<Local>,           // ⇔ time_entries.clock_in (RFC 3339)
    pub break_start: Option<DateTime<Local>>, // ⇔ time_entries.break_start
    pub break_end: Option<DateTime<Local>>,   // ⇔ time_entries.break_end
    pub clock_out: Option<DateTime<Local>>,   // ⇔ time_entries.clock_out
    pub total_hours: f64,                    // ⇔ time_entries.total_hours, set once at clock-out
}

/// A time entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeEntry {
    pub user_email: String,
    pub user_name: String,
    pub date: NaiveDate,
    pub clock_in: DateTime<Local>,
}

impl NewTimeEntry {
    /// Entry opened by `user` at `at`; the calendar day follows the local clock-in time.
    pub fn open(user: &SessionUser, at: DateTime<Local>) -> Self {
        Self {
            user_email: user.email.clone(),
            user_name: user.name.clone(),
            date: at.date_naive(),
            clock_in: at,
        }
    }
}

impl TimeEntry {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    pub fn on_break(&self) -> bool {
        self.break_start.is_some() && self.break_end.is_none()
    }

    /// Status implied by this entry alone.
    pub fn status(&self) -> ClockStatus {
        if !self.is_open() {
            ClockStatus::Out
        } else if self.on_break() {
            ClockStatus::Break
        } else {
            ClockStatus::In
        }
    }

    /// Most recent instant recorded on the entry.
    pub fn last_event_at(&self) -> DateTime<Local> {
        [self.break_start, self.break_end, self.clock_out]
            .into_iter()
            .flatten()
            .fold(self.clock_in, |acc, t| acc.max(t))
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
