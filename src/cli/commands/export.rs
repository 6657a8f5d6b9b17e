use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::SessionLogic;
use crate::core::report::ReportFilter;
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        user,
        date,
        force,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        let current = SessionLogic::require_user(&pool)?;

        let filter = ReportFilter::parse(user.as_deref(), date.as_deref())?;
        let written = ExportLogic::export(&pool, *format, file, &filter, *force)?;

        if written > 0 {
            log::audit(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{} exported {} entries to {}", current.email, written, file),
            );
        }
    }
    Ok(())
}
