use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::SessionLogic;
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Logout) {
        let mut pool = open_db(&cfg.database)?;

        match SessionLogic::logout(&mut pool)? {
            Some(user) => {
                log::audit(&pool.conn, "logout", &user.email, "Logged out");
                success(format!("Goodbye, {}.", user.name));
            }
            None => info("No user is logged in."),
        }
    }
    Ok(())
}
