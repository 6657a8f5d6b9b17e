use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::SessionLogic;
use crate::core::service::{ClockService, DayStatus};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::models::user::SessionUser;
use crate::ui::messages::header;
use crate::utils::colors::colorize_status;
use crate::utils::formatting::{bold, format_hours, format_long_date, format_time};
use crate::utils::time::parse_date;
use chrono::Local;

fn print_entry(entry: &TimeEntry) {
    println!("  Clock In:     {}", format_time(&entry.clock_in));
    if let Some(t) = &entry.break_start {
        println!("  Break Start:  {}", format_time(t));
    }
    if let Some(t) = &entry.break_end {
        println!("  Break End:    {}", format_time(t));
    }
    if let Some(t) = &entry.clock_out {
        println!("  Clock Out:    {}", format_time(t));
        println!("  {}", bold(&format!("Total Hours:  {}", format_hours(entry.total_hours))));
    }
}

fn print_dashboard(user: &SessionUser, day: &DayStatus, cfg: &Config) {
    header(format!("Welcome, {}", user.name));
    println!("{}", bold(&format_long_date(&day.date)));
    if cfg.show_clock {
        println!("{}", Local::now().format("%H:%M"));
    }
    println!("Current Status: {}", colorize_status(day.status));

    let actions: Vec<&str> = day
        .status
        .available_actions()
        .iter()
        .map(|a| a.op_name())
        .collect();
    println!("Available: {}", actions.join(", "));

    if !day.entries.is_empty() {
        println!("\nToday's Entries:");
        let sep = cfg.separator().to_string().repeat(24);
        for entry in &day.entries {
            println!("{}", sep);
            print_entry(entry);
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let user = SessionLogic::require_user(&pool)?;

        let day = match date {
            Some(d) => parse_date(d)?,
            None => Local::now().date_naive(),
        };

        let status = ClockService::new(&mut pool).day_status(&user, day)?;
        print_dashboard(&user, &status, cfg);
    }
    Ok(())
}
