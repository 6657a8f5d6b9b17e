use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{SessionLogic, StaffDirectory};
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let directory = StaffDirectory::from_config(cfg);

        match SessionLogic::login(&mut pool, &directory, email, password, Local::now()) {
            Ok(user) => {
                log::audit(&pool.conn, "login", &user.email, "Login successful");
                success("Login successful");
                println!("Welcome back, {}!", user.name);
            }
            Err(e @ (AppError::InvalidCredentials | AppError::InvalidEmail(_))) => {
                log::audit(&pool.conn, "login_failed", email.trim(), &e.to_string());
                return Err(e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
