use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Sandbox;

/// John works two days, Jane one; Jane is the user left logged in.
fn seeded() -> Sandbox {
    let sb = Sandbox::new();

    sb.login("john@example.com", "password1");
    sb.work_day("2025-06-02", "09:00", Some(("12:00", "12:30")), "17:00");
    sb.work_day("2025-06-03", "08:00", None, "12:15");

    sb.login("jane@example.com", "password2");
    sb.work_day("2025-06-02", "10:00", None, "14:00");
    sb
}

#[test]
fn test_report_requires_login() {
    let sb = Sandbox::new();

    sb.wt()
        .args(["report"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_empty_report() {
    let sb = Sandbox::new();
    sb.login("john@example.com", "password1");

    sb.wt()
        .args(["report"])
        .assert()
        .success()
        .stdout(contains("Time Reports"))
        .stdout(contains("No entries found"));
}

#[test]
fn test_report_all_users_and_dates() {
    let sb = seeded();

    sb.wt()
        .args(["report"])
        .assert()
        .success()
        .stdout(contains("John Smith"))
        .stdout(contains("Jane Doe"))
        .stdout(contains("Jun 2, 2025"))
        .stdout(contains("Jun 3, 2025"))
        .stdout(contains("Total Hours:"))
        .stdout(contains("15.75"));
}

#[test]
fn test_report_user_filter() {
    let sb = seeded();

    sb.wt()
        .args(["report", "--user", "jane@example.com", "--date", "all"])
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("John Smith").not())
        .stdout(contains("4.00"));
}

#[test]
fn test_report_user_filter_is_exact() {
    let sb = seeded();

    sb.wt()
        .args(["report", "--user", "john"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_report_user_and_date_filter() {
    let sb = seeded();

    sb.wt()
        .args(["report", "-u", "john@example.com", "-d", "2025-06-03"])
        .assert()
        .success()
        .stdout(contains("Jun 3, 2025"))
        .stdout(contains("Jun 2, 2025").not())
        .stdout(contains("4.25"));
}

#[test]
fn test_report_shows_open_entry_as_active() {
    let sb = Sandbox::new();
    sb.login("mike@example.com", "password3");
    sb.clock("clock-in", "2025-06-04 09:00");

    sb.wt()
        .args(["report", "--date", "2025-06-04"])
        .assert()
        .success()
        .stdout(contains("Mike Johnson"))
        .stdout(contains("Active"));
}

#[test]
fn test_report_bad_date_filter() {
    let sb = seeded();

    sb.wt()
        .args(["report", "--date", "02/06/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_report_filter_options() {
    let sb = seeded();

    sb.wt()
        .args(["report", "--filters"])
        .assert()
        .success()
        .stdout(contains("All Users"))
        .stdout(contains("john@example.com  (John Smith)"))
        .stdout(contains("jane@example.com  (Jane Doe)"))
        .stdout(contains("All Dates"))
        .stdout(contains("2025-06-03  (Jun 3, 2025)"))
        .stdout(contains("2025-06-02  (Jun 2, 2025)"));
}
