//! Unified application error type.
//! All modules (db, core, cli, config, export) return AppError so that the
//! binary can report every failure the same way.

use crate::models::clock_status::{ClockAction, ClockStatus};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    // ---------------------------
    // Session / auth
    // ---------------------------
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,

    #[error("Not logged in. Run `worktime login` first.")]
    NotLoggedIn,

    // ---------------------------
    // Clock state machine
    // ---------------------------
    #[error("Cannot {action} while {status}")]
    InvalidTransition {
        status: ClockStatus,
        action: ClockAction,
    },

    #[error("A break was already taken on entry {0}")]
    BreakAlreadyTaken(i64),

    #[error("Time order error: {0}")]
    TimeOrder(String),

    #[error("Time entry not found: {0}")]
    EntryNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
