//! Reports: filter entries by user/date, sort newest first, total the hours.

use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::utils::formatting::{
    ACTIVE, EMPTY, format_date, format_hours, format_time, time_or_placeholder,
};
use crate::utils::table::{Column, Table};
use crate::utils::time::{parse_date, round_hours};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Keyword selecting every user or every date.
pub const ALL: &str = "all";

/// `None` on either axis means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub user_email: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ReportFilter {
    /// Build a filter from CLI values; absent values and `all` select everything.
    pub fn parse(user: Option<&str>, date: Option<&str>) -> AppResult<Self> {
        let user_email = user
            .map(str::trim)
            .filter(|u| *u != ALL)
            .map(str::to_string);

        let date = match date.map(str::trim) {
            None => None,
            Some(ALL) => None,
            Some(d) => Some(parse_date(d)?),
        };

        Ok(Self { user_email, date })
    }

    /// Exact match on both axes.
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        self.user_email
            .as_deref()
            .is_none_or(|email| entry.user_email == email)
            && self.date.is_none_or(|d| entry.date == d)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub entries: Vec<TimeEntry>,
    pub total_hours: f64,
}

/// A user appearing in the entries, named after their first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportUser {
    pub email: String,
    pub name: String,
}

/// Filter, then sort by date descending and clock-in descending.
pub fn build_report(entries: Vec<TimeEntry>, filter: &ReportFilter) -> Report {
    let mut entries: Vec<TimeEntry> = entries.into_iter().filter(|e| filter.matches(e)).collect();

    entries.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.clock_in.cmp(&a.clock_in))
    });

    let total_hours = sum_hours(&entries);
    Report {
        entries,
        total_hours,
    }
}

pub fn sum_hours(entries: &[TimeEntry]) -> f64 {
    round_hours(entries.iter().map(|e| e.total_hours).sum())
}

/// Distinct users, in order of first appearance.
pub fn unique_users(entries: &[TimeEntry]) -> Vec<ReportUser> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|e| seen.insert(e.user_email.as_str()))
        .map(|e| ReportUser {
            email: e.user_email.clone(),
            name: e.user_name.clone(),
        })
        .collect()
}

/// Distinct dates, newest first.
pub fn unique_dates(entries: &[TimeEntry]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries
        .iter()
        .map(|e| e.date)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    dates.sort_by(|a, b| b.cmp(a));
    dates
}

/// Hours cell: zero (or still open) shows the placeholder.
fn hours_cell(entry: &TimeEntry) -> String {
    if entry.total_hours == 0.0 {
        EMPTY.to_string()
    } else {
        format_hours(entry.total_hours)
    }
}

pub fn report_row(entry: &TimeEntry) -> Vec<String> {
    vec![
        format_date(&entry.date),
        entry.user_name.clone(),
        format_time(&entry.clock_in),
        time_or_placeholder(&entry.break_start),
        time_or_placeholder(&entry.break_end),
        entry
            .clock_out
            .as_ref()
            .map(format_time)
            .unwrap_or_else(|| ACTIVE.to_string()),
        hours_cell(entry),
    ]
}

pub fn render_report(report: &Report, separator: char) -> String {
    if report.entries.is_empty() {
        return "No entries found\n".to_string();
    }

    let mut table = Table::new(
        vec![
            Column::left("Date"),
            Column::left("Name"),
            Column::left("Clock In"),
            Column::left("Break Start"),
            Column::left("Break End"),
            Column::left("Clock Out"),
            Column::right("Hours"),
        ],
        separator,
    );

    for entry in &report.entries {
        table.add_row(report_row(entry));
    }
    table.set_footer("Total Hours:", &format_hours(report.total_hours));

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn ts(d: u32, h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, d, h, m, 0).unwrap()
    }

    fn entry(id: i64, email: &str, name: &str, d: u32, h: u32, hours: f64) -> TimeEntry {
        TimeEntry {
            id,
            user_email: email.into(),
            user_name: name.into(),
            date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
            clock_in: ts(d, h, 0),
            break_start: None,
            break_end: None,
            clock_out: Some(ts(d, h + 1, 0)),
            total_hours: hours,
        }
    }

    fn sample() -> Vec<TimeEntry> {
        vec![
            entry(1, "john@example.com", "John Smith", 2, 9, 7.5),
            entry(2, "jane@example.com", "Jane Doe", 2, 8, 8.25),
            entry(3, "john@example.com", "John Smith", 3, 9, 4.0),
            entry(4, "john@example.com", "John Smith", 3, 14, 3.33),
        ]
    }

    #[test]
    fn no_filter_sorts_newest_first() {
        let report = build_report(sample(), &ReportFilter::default());
        let ids: Vec<i64> = report.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 3, 1, 2]);
        assert_eq!(report.total_hours, 23.08);
    }

    #[test]
    fn user_filter_is_exact() {
        let filter = ReportFilter::parse(Some("john@example.com"), None).unwrap();
        let report = build_report(sample(), &filter);
        assert!(report.entries.iter().all(|e| e.user_email == "john@example.com"));
        assert_eq!(report.entries.len(), 3);

        let partial = ReportFilter::parse(Some("john"), None).unwrap();
        assert!(build_report(sample(), &partial).entries.is_empty());
    }

    #[test]
    fn date_and_user_filters_combine() {
        let filter = ReportFilter::parse(Some("john@example.com"), Some("2025-06-02")).unwrap();
        let report = build_report(sample(), &filter);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].id, 1);
        assert_eq!(report.total_hours, 7.5);
    }

    #[test]
    fn total_equals_sum_of_filtered_entries() {
        let filter = ReportFilter::parse(Some("all"), Some("2025-06-03")).unwrap();
        let report = build_report(sample(), &filter);
        let sum: f64 = report.entries.iter().map(|e| e.total_hours).sum();
        assert_eq!(report.total_hours, round_hours(sum));
        assert_eq!(report.total_hours, 7.33);
    }

    #[test]
    fn only_lowercase_all_selects_everything() {
        let filter = ReportFilter::parse(Some("all"), Some("all")).unwrap();
        assert_eq!(filter, ReportFilter::default());

        let upper = ReportFilter::parse(Some("ALL"), None).unwrap();
        assert_eq!(upper.user_email.as_deref(), Some("ALL"));
        assert!(build_report(sample(), &upper).entries.is_empty());

        assert!(ReportFilter::parse(None, Some("All")).is_err());
    }

    #[test]
    fn bad_date_filter_is_an_error() {
        assert!(ReportFilter::parse(None, Some("03/06/2025")).is_err());
    }

    #[test]
    fn filter_option_lists() {
        let users = unique_users(&sample());
        assert_eq!(
            users,
            vec![
                ReportUser {
                    email: "john@example.com".into(),
                    name: "John Smith".into()
                },
                ReportUser {
                    email: "jane@example.com".into(),
                    name: "Jane Doe".into()
                },
            ]
        );

        let dates = unique_dates(&sample());
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn open_entry_renders_placeholders() {
        let mut e = entry(9, "mike@example.com", "Mike Johnson", 4, 9, 0.0);
        e.clock_out = None;

        let row = report_row(&e);
        assert_eq!(row[3], "-");
        assert_eq!(row[4], "-");
        assert_eq!(row[5], "Active");
        assert_eq!(row[6], "-");
    }

    #[test]
    fn rendering_has_footer_or_empty_message() {
        let report = build_report(sample(), &ReportFilter::default());
        let out = render_report(&report, '-');
        assert!(out.contains("Total Hours:"));
        assert!(out.contains("23.08"));
        assert!(out.contains("Jun 3, 2025"));

        let empty = build_report(Vec::new(), &ReportFilter::default());
        assert_eq!(render_report(&empty, '-'), "No entries found\n");
    }
}
