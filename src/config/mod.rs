use crate::errors::AppResult;
use crate::models::user::StaffUser;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

/// Overrides the configuration directory (used by tests and portable installs).
pub const HOME_ENV: &str = "WORKTIME_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default = "Config::default_staff")]
    pub staff: Vec<StaffUser>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_clock")]
    pub show_clock: bool,
}

fn default_separator_char() -> String {
    "-".to_string()
}

fn default_show_clock() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            staff: Self::default_staff(),
            separator_char: default_separator_char(),
            show_clock: default_show_clock(),
        }
    }
}

impl Config {
    /// Demo accounts shipped with a fresh configuration.
    pub fn default_staff() -> Vec<StaffUser> {
        vec![
            StaffUser::new("john@example.com", "John Smith", "password1"),
            StaffUser::new("jane@example.com", "Jane Doe", "password2"),
            StaffUser::new("mike@example.com", "Mike Johnson", "password3"),
        ]
    }

    /// Return the configuration directory: `$WORKTIME_HOME`, else `~/.worktime`
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return expand_tilde(custom.trim());
        }

        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".worktime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktime.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worktime.sqlite")
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Create the configuration directory, the config file and an empty database file.
    ///
    /// A relative `custom_db` is placed inside the configuration directory.
    /// With `is_test` the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        // Keep an existing staff list when re-initialising.
        let staff = if Self::config_file().exists() {
            Self::load()?.staff
        } else {
            Self::default_staff()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            staff,
            ..Self::default()
        };

        if !is_test {
            config.save()?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/wt.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/wt.sqlite");
        assert_eq!(cfg.staff.len(), 3);
        assert_eq!(cfg.separator(), '-');
        assert!(cfg.show_clock);
    }

    #[test]
    fn staff_list_is_read_from_yaml() {
        let yaml = r#"
database: /tmp/wt.sqlite
staff:
  - email: ann@example.com
    name: Ann Lee
    password: secret
separator_char: "="
show_clock: false
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            cfg.staff,
            vec![StaffUser::new("ann@example.com", "Ann Lee", "secret")]
        );
        assert_eq!(cfg.separator(), '=');
        assert!(!cfg.show_clock);
    }
}
