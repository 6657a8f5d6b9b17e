use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::SessionLogic;
use crate::core::report::{ReportFilter, build_report, render_report, unique_dates, unique_users};
use crate::db::initialize::open_db;
use crate::db::repository::EntryStore;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::header;
use crate::utils::formatting::format_date;

fn print_filters(entries: &[TimeEntry]) {
    println!("Users:");
    println!("  all  (All Users)");
    for u in unique_users(entries) {
        println!("  {}  ({})", u.email, u.name);
    }

    println!("\nDates:");
    println!("  all  (All Dates)");
    for d in unique_dates(entries) {
        println!("  {}  ({})", d.format("%Y-%m-%d"), format_date(&d));
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        user,
        date,
        filters,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        SessionLogic::require_user(&pool)?;

        let entries = pool.all_entries()?;

        if *filters {
            print_filters(&entries);
            return Ok(());
        }

        let filter = ReportFilter::parse(user.as_deref(), date.as_deref())?;
        let report = build_report(entries, &filter);

        header("Time Reports");
        print!("{}", render_report(&report, cfg.separator()));
    }
    Ok(())
}
