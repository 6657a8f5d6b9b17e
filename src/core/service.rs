//! Clock operations over an [`EntryRepository`].
//!
//! Every event runs as one transaction: load the user's open entry, check
//! the transition, write the result. The open entry is looked up by user
//! only, so a shift started before midnight is closed on the next day.

use crate::core::clock;
use crate::db::repository::{EntryRepository, EntryStore};
use crate::errors::{AppError, AppResult};
use crate::models::clock_status::{ClockAction, ClockStatus};
use crate::models::time_entry::{NewTimeEntry, TimeEntry};
use crate::models::user::SessionUser;
use chrono::{DateTime, Local, NaiveDate};

/// What the dashboard shows for one user and day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub status: ClockStatus,
    pub open_entry: Option<TimeEntry>,
    pub entries: Vec<TimeEntry>,
}

pub struct ClockService<'r, R: EntryRepository> {
    repo: &'r mut R,
}

impl<'r, R: EntryRepository> ClockService<'r, R> {
    pub fn new(repo: &'r mut R) -> Self {
        Self { repo }
    }

    pub fn day_status(&self, user: &SessionUser, date: NaiveDate) -> AppResult<DayStatus> {
        let mut entries = self.repo.entries_for_day(&user.email, date)?;
        let open_entry = self
            .repo
            .latest_open_entry(&user.email)?
            .filter(|e| e.date <= date);

        // Carried over from an earlier day.
        if let Some(open) = &open_entry
            && open.date < date
        {
            entries.insert(0, open.clone());
        }

        Ok(DayStatus {
            date,
            status: clock::derive_status(open_entry.as_ref()),
            open_entry,
            entries,
        })
    }

    pub fn clock_in(&mut self, user: &SessionUser, at: DateTime<Local>) -> AppResult<TimeEntry> {
        self.perform(user, ClockAction::ClockIn, at)
    }

    pub fn start_break(&mut self, user: &SessionUser, at: DateTime<Local>) -> AppResult<TimeEntry> {
        self.perform(user, ClockAction::StartBreak, at)
    }

    pub fn end_break(&mut self, user: &SessionUser, at: DateTime<Local>) -> AppResult<TimeEntry> {
        self.perform(user, ClockAction::EndBreak, at)
    }

    pub fn clock_out(&mut self, user: &SessionUser, at: DateTime<Local>) -> AppResult<TimeEntry> {
        self.perform(user, ClockAction::ClockOut, at)
    }

    /// Apply `action` for `user` at `at`, on the user's latest open entry.
    pub fn perform(
        &mut self,
        user: &SessionUser,
        action: ClockAction,
        at: DateTime<Local>,
    ) -> AppResult<TimeEntry> {
        self.repo
            .transaction(|store| apply_in_store(store, user, action, at))
    }
}

fn apply_in_store(
    store: &dyn EntryStore,
    user: &SessionUser,
    action: ClockAction,
    at: DateTime<Local>,
) -> AppResult<TimeEntry> {
    let open = store.latest_open_entry(&user.email)?;
    let status = clock::derive_status(open.as_ref());

    clock::next_status(status, action)?;

    match (action, open) {
        (ClockAction::ClockIn, _) => {
            ensure_after_last_clock_out(store, user, at)?;
            store.insert(&NewTimeEntry::open(user, at))
        }
        (_, Some(mut entry)) => {
            clock::apply(&mut entry, action, at)?;
            store.update(&entry)?;
            Ok(entry)
        }
        (_, None) => Err(AppError::InvalidTransition { status, action }),
    }
}

/// A new entry may not start inside one already closed on the same or the
/// previous day.
fn ensure_after_last_clock_out(
    store: &dyn EntryStore,
    user: &SessionUser,
    at: DateTime<Local>,
) -> AppResult<()> {
    let day = at.date_naive();

    let mut last_out: Option<DateTime<Local>> = None;
    for d in day.pred_opt().into_iter().chain([day]) {
        for entry in store.entries_for_day(&user.email, d)? {
            last_out = last_out.max(entry.clock_out);
        }
    }

    match last_out {
        Some(out) if at < out => Err(AppError::TimeOrder(format!(
            "clock-in at {} is earlier than the last clock-out ({})",
            at.format("%Y-%m-%d %H:%M"),
            out.format("%Y-%m-%d %H:%M"),
        ))),
        _ => Ok(()),
    }
}
