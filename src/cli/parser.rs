use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worktime
#[derive(Parser)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Staff time clock: log in, clock in and out, take breaks and report worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration (passwords masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log in as a member of staff
    Login {
        #[arg(long, short = 'e')]
        email: String,

        #[arg(long, short = 'p')]
        password: String,
    },

    /// Log out the current user
    Logout,

    /// Show the current user's clock status and today's entries
    Status {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Show another day instead of today")]
        date: Option<String>,
    },

    /// Clock in (creates today's entry)
    #[command(name = "clock-in")]
    ClockIn {
        #[arg(long, value_name = "TIME", help = "Event time: HH:MM (today) or 'YYYY-MM-DD HH:MM'")]
        at: Option<String>,
    },

    /// Start a break
    #[command(name = "break-start")]
    BreakStart {
        #[arg(long, value_name = "TIME", help = "Event time: HH:MM (today) or 'YYYY-MM-DD HH:MM'")]
        at: Option<String>,
    },

    /// End the current break
    #[command(name = "break-end")]
    BreakEnd {
        #[arg(long, value_name = "TIME", help = "Event time: HH:MM (today) or 'YYYY-MM-DD HH:MM'")]
        at: Option<String>,
    },

    /// Clock out (closes today's entry and computes the worked hours)
    #[command(name = "clock-out")]
    ClockOut {
        #[arg(long, value_name = "TIME", help = "Event time: HH:MM (today) or 'YYYY-MM-DD HH:MM'")]
        at: Option<String>,
    },

    /// Time report across users and dates
    Report {
        #[arg(long, short = 'u', value_name = "EMAIL", help = "Filter by user email, or 'all'")]
        user: Option<String>,

        #[arg(long, short = 'd', value_name = "YYYY-MM-DD", help = "Filter by date, or 'all'")]
        date: Option<String>,

        #[arg(long = "filters", help = "List the users and dates available as filters")]
        filters: bool,
    },

    /// Export report rows
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'u', value_name = "EMAIL")]
        user: Option<String>,

        #[arg(long, short = 'd', value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
