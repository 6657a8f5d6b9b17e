//! Clock state machine: OUT → IN ⇄ BREAK → OUT.
//!
//! Pure functions over [`TimeEntry`]; persistence lives in
//! [`crate::core::service`].

use crate::errors::{AppError, AppResult};
use crate::models::clock_status::{ClockAction, ClockStatus};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::{hours_between, round_hours};
use chrono::{DateTime, Local};

/// Status implied by the user's open entry for the day, if any.
pub fn derive_status(open_entry: Option<&TimeEntry>) -> ClockStatus {
    open_entry.map_or(ClockStatus::Out, TimeEntry::status)
}

/// Status reached by applying `action` in `status`.
pub fn next_status(status: ClockStatus, action: ClockAction) -> AppResult<ClockStatus> {
    use ClockAction::*;
    use ClockStatus::*;

    match (status, action) {
        (Out, ClockIn) => Ok(In),
        (In, StartBreak) => Ok(Break),
        (Break, EndBreak) => Ok(In),
        (In | Break, ClockOut) => Ok(Out),
        (status, action) => Err(AppError::InvalidTransition { status, action }),
    }
}

/// Worked hours: elapsed time minus the break (when both ends are set),
/// rounded to two decimals.
pub fn compute_total_hours(
    clock_in: DateTime<Local>,
    clock_out: DateTime<Local>,
    break_start: Option<DateTime<Local>>,
    break_end: Option<DateTime<Local>>,
) -> f64 {
    let mut hours = hours_between(clock_in, clock_out);

    if let (Some(start), Some(end)) = (break_start, break_end) {
        hours -= hours_between(start, end);
    }

    round_hours(hours)
}

fn ensure_in_order(entry: &TimeEntry, action: ClockAction, at: DateTime<Local>) -> AppResult<()> {
    let last = entry.last_event_at();
    if at < last {
        return Err(AppError::TimeOrder(format!(
            "{} at {} is earlier than the last recorded event ({})",
            action.op_name(),
            at.format("%Y-%m-%d %H:%M"),
            last.format("%Y-%m-%d %H:%M"),
        )));
    }
    Ok(())
}

/// Apply a break or clock-out event to an open entry.
///
/// Clock-in creates a new entry and is never applied to an existing one.
pub fn apply(entry: &mut TimeEntry, action: ClockAction, at: DateTime<Local>) -> AppResult<()> {
    let status = entry.status();
    next_status(status, action)?;

    match action {
        ClockAction::ClockIn => {
            return Err(AppError::InvalidTransition { status, action });
        }
        ClockAction::StartBreak => {
            if entry.break_end.is_some() {
                return Err(AppError::BreakAlreadyTaken(entry.id));
            }
            ensure_in_order(entry, action, at)?;
            entry.break_start = Some(at);
        }
        ClockAction::EndBreak => {
            ensure_in_order(entry, action, at)?;
            entry.break_end = Some(at);
        }
        ClockAction::ClockOut => {
            ensure_in_order(entry, action, at)?;
            // Leaving while on break ends the break at the same instant.
            if entry.on_break() {
                entry.break_end = Some(at);
            }
            entry.clock_out = Some(at);
            entry.total_hours =
                compute_total_hours(entry.clock_in, at, entry.break_start, entry.break_end);
        }
    }

    Ok(())
}
