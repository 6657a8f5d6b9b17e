//! Formatting utilities used for CLI and export outputs.

use chrono::{DateTime, Local, NaiveDate};

/// Placeholder for an unset optional field.
pub const EMPTY: &str = "-";

/// Shown instead of a clock-out time while the entry is open.
pub const ACTIVE: &str = "Active";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `09:05`
pub fn format_time(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M").to_string()
}

/// `Jun 2, 2025`
pub fn format_date(d: &NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// `Monday, June 2, 2025`
pub fn format_long_date(d: &NaiveDate) -> String {
    d.format("%A, %B %-d, %Y").to_string()
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn time_or_placeholder(ts: &Option<DateTime<Local>>) -> String {
    ts.as_ref()
        .map(format_time)
        .unwrap_or_else(|| EMPTY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_render_in_short_and_long_form() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(format_date(&d), "Jun 2, 2025");
        assert_eq!(format_long_date(&d), "Monday, June 2, 2025");
    }

    #[test]
    fn missing_time_renders_placeholder() {
        let ts = Local.with_ymd_and_hms(2025, 6, 2, 9, 5, 0).unwrap();
        assert_eq!(time_or_placeholder(&Some(ts)), "09:05");
        assert_eq!(time_or_placeholder(&None), "-");
    }
}
