use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Sandbox;

#[test]
fn test_login_with_demo_account() {
    let sb = Sandbox::new();

    sb.wt()
        .args(["login", "--email", "john@example.com", "--password", "password1"])
        .assert()
        .success()
        .stdout(contains("Login successful"))
        .stdout(contains("Welcome back, John Smith!"));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let sb = Sandbox::new();

    sb.wt()
        .args(["login", "--email", "john@example.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(contains("Invalid email or password. Please try again."));

    sb.wt()
        .args(["status"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_failed_login_keeps_existing_session() {
    let sb = Sandbox::new();
    sb.login("jane@example.com", "password2");

    sb.wt()
        .args(["login", "--email", "mike@example.com", "--password", "password1"])
        .assert()
        .failure();

    sb.wt()
        .args(["status"])
        .assert()
        .success()
        .stdout(contains("Welcome, Jane Doe"));
}

#[test]
fn test_logout_requires_new_login() {
    let sb = Sandbox::new();
    sb.login("mike@example.com", "password3");

    sb.wt()
        .args(["logout"])
        .assert()
        .success()
        .stdout(contains("Goodbye, Mike Johnson."));

    sb.wt()
        .args(["report"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    sb.wt()
        .args(["logout"])
        .assert()
        .success()
        .stdout(contains("No user is logged in."));
}

#[test]
fn test_staff_directory_comes_from_config_file() {
    let sb = Sandbox::new();
    sb.write_config(&format!(
        r#"
database: {}
staff:
  - email: ann@example.com
    name: Ann Lee
    password: s3cret
"#,
        sb.db
    ));

    sb.wt()
        .args(["login", "--email", "ann@example.com", "--password", "s3cret"])
        .assert()
        .success()
        .stdout(contains("Welcome back, Ann Lee!"));

    // Demo accounts are gone once a staff list is configured.
    sb.wt()
        .args(["login", "--email", "john@example.com", "--password", "password1"])
        .assert()
        .failure();
}

#[test]
fn test_config_print_masks_passwords() {
    let sb = Sandbox::new();

    sb.wt()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("jane@example.com"))
        .stdout(contains("********"))
        .stdout(contains("password2").not());
}

#[test]
fn test_login_events_are_audited() {
    let sb = Sandbox::new();
    sb.login("john@example.com", "password1");
    sb.wt()
        .args(["login", "--email", "john@example.com", "--password", "bad"])
        .assert()
        .failure();

    sb.wt()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Login successful"))
        .stdout(contains("login_failed"));
}
