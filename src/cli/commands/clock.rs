use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::SessionLogic;
use crate::core::service::ClockService;
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::clock_status::ClockAction;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::notice;
use crate::utils::formatting::{format_hours, format_time};
use crate::utils::time::parse_at;
use chrono::{DateTime, Local};

/// Confirmation shown after a clock event.
fn describe(action: ClockAction, entry: &TimeEntry) -> String {
    let at = |ts: Option<DateTime<Local>>| ts.as_ref().map(format_time).unwrap_or_default();

    match action {
        ClockAction::ClockIn => format!("You clocked in at {}", format_time(&entry.clock_in)),
        ClockAction::StartBreak => format!("Your break started at {}", at(entry.break_start)),
        ClockAction::EndBreak => format!("Your break ended at {}", at(entry.break_end)),
        ClockAction::ClockOut => format!(
            "You clocked out at {}. Total hours: {}",
            at(entry.clock_out),
            format_hours(entry.total_hours)
        ),
    }
}

/// Handles `clock-in`, `break-start`, `break-end` and `clock-out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (action, at) = match cmd {
        Commands::ClockIn { at } => (ClockAction::ClockIn, at),
        Commands::BreakStart { at } => (ClockAction::StartBreak, at),
        Commands::BreakEnd { at } => (ClockAction::EndBreak, at),
        Commands::ClockOut { at } => (ClockAction::ClockOut, at),
        _ => return Ok(()),
    };

    let mut pool = open_db(&cfg.database)?;
    let user = SessionLogic::require_user(&pool)?;
    let at = parse_at(at.as_deref(), Local::now())?;

    let entry = ClockService::new(&mut pool).perform(&user, action, at)?;

    let message = describe(action, &entry);
    log::audit(
        &pool.conn,
        action.op_name(),
        &user.email,
        &format!("entry {}: {}", entry.id, message),
    );
    notice(action.title(), message);

    Ok(())
}
