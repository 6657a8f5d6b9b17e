#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated configuration directory plus database for one test.
pub struct Sandbox {
    pub home: TempDir,
    pub db: String,
}

impl Sandbox {
    /// Fresh sandbox with an initialized database.
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp dir");
        let db = home
            .path()
            .join("worktime_test.sqlite")
            .to_string_lossy()
            .to_string();

        let sb = Self { home, db };
        sb.wt().args(["--test", "init"]).assert().success();
        sb
    }

    /// `worktime --db <sandbox db>` with the config directory pointed at the sandbox.
    pub fn wt(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("worktime");
        cmd.env("WORKTIME_HOME", self.home.path())
            .args(["--db", &self.db]);
        cmd
    }

    pub fn login(&self, email: &str, password: &str) {
        self.wt()
            .args(["login", "--email", email, "--password", password])
            .assert()
            .success();
    }

    /// Run a clock command at a fixed instant, expecting success.
    pub fn clock(&self, command: &str, at: &str) {
        self.wt().args([command, "--at", at]).assert().success();
    }

    /// Clock in and out on `date` with an optional break.
    pub fn work_day(&self, date: &str, start: &str, brk: Option<(&str, &str)>, end: &str) {
        self.clock("clock-in", &format!("{date} {start}"));
        if let Some((bs, be)) = brk {
            self.clock("break-start", &format!("{date} {bs}"));
            self.clock("break-end", &format!("{date} {be}"));
        }
        self.clock("clock-out", &format!("{date} {end}"));
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.path("worktime.conf"), yaml).expect("write config");
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}
