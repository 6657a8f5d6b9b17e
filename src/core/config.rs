use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

const MASK: &str = "********";

pub struct ConfigLogic;

impl ConfigLogic {
    /// YAML rendering of `cfg` with staff passwords masked.
    pub fn render_masked(cfg: &Config) -> AppResult<String> {
        let mut shown = cfg.clone();
        for user in &mut shown.staff {
            user.password = MASK.to_string();
        }
        Ok(serde_yaml::to_string(&shown)?)
    }

    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", Self::render_masked(cfg)?);
        Ok(())
    }

    fn platform_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file in `editor`, falling back to `$EDITOR`/`$VISUAL`/platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = Self::platform_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", requested));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                requested, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit {} with '{}'",
                path.display(),
                default_editor
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passwords_are_masked() {
        let cfg = Config {
            database: "/tmp/wt.sqlite".into(),
            ..Config::default()
        };
        let out = ConfigLogic::render_masked(&cfg).unwrap();
        assert!(out.contains("john@example.com"));
        assert!(out.contains(MASK));
        assert!(!out.contains("password1"));
    }
}
