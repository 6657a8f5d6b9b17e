use crate::models::clock_status::ClockStatus;

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Clocked in → green, on break → yellow, clocked out → red.
pub fn color_for_status(status: ClockStatus) -> &'static str {
    match status {
        ClockStatus::In => GREEN,
        ClockStatus::Break => YELLOW,
        ClockStatus::Out => RED,
    }
}

pub fn colorize_status(status: ClockStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}
