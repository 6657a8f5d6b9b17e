//! Back-fill configuration keys introduced after the file was written.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn as_mapping(value: Value, what: &str) -> AppResult<Mapping> {
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!("{what} is not a YAML mapping"))),
    }
}

fn defaults() -> AppResult<Mapping> {
    as_mapping(serde_yaml::to_value(Config::default())?, "default configuration")
}

/// Keys known to [`Config`] but absent from `current`.
pub fn missing_keys(current: &Mapping) -> AppResult<Vec<String>> {
    Ok(defaults()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Insert default values for every missing key; returns the keys added.
pub fn fill_missing(current: &mut Mapping) -> AppResult<Vec<String>> {
    let mut added = Vec::new();
    for (k, v) in defaults()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }
    Ok(added)
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    as_mapping(serde_yaml::from_str(&content)?, "configuration file")
}

/// Report missing keys without touching the file.
pub fn check_config_file(path: &Path) -> AppResult<Vec<String>> {
    let missing = missing_keys(&read_mapping(path)?)?;
    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        info(format!("Missing configuration keys: {}", missing.join(", ")));
    }
    Ok(missing)
}

/// Add missing keys to the file at `path`, preserving existing values.
pub fn run_config_migration(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "configuration file not found: {} (run `worktime init`)",
            path.display()
        )));
    }

    let mut current = read_mapping(path)?;
    let added = fill_missing(&mut current)?;

    if added.is_empty() {
        info("Configuration already up to date.");
        return Ok(added);
    }

    fs::write(path, serde_yaml::to_string(&current)?)?;
    success(format!("Configuration migrated, added: {}", added.join(", ")));
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_keys_are_added() {
        let mut current: Mapping =
            serde_yaml::from_str("database: /data/wt.sqlite\nseparator_char: \"=\"\n").unwrap();

        let added = fill_missing(&mut current).unwrap();
        assert!(added.contains(&"staff".to_string()));
        assert!(added.contains(&"show_clock".to_string()));
        assert!(!added.contains(&"database".to_string()));

        let cfg: Config = serde_yaml::from_value(Value::Mapping(current)).unwrap();
        assert_eq!(cfg.database, "/data/wt.sqlite");
        assert_eq!(cfg.separator_char, "=");
        assert_eq!(cfg.staff.len(), 3);

        let complete = as_mapping(serde_yaml::to_value(&cfg).unwrap(), "config").unwrap();
        assert!(missing_keys(&complete).unwrap().is_empty());
    }
}
