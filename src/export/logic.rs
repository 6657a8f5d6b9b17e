// src/export/logic.rs

use crate::core::report::{ReportFilter, build_report};
use crate::db::pool::DbPool;
use crate::db::repository::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report rows selected by `filter` to `file`.
    ///
    /// - `file` must be an absolute path
    /// - rows keep the report order (date and clock-in, newest first)
    ///
    /// Returns the number of rows written.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        filter: &ReportFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let report = build_report(pool.all_entries()?, filter);

        if report.entries.is_empty() {
            warning("No entries found for the selected filters.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<EntryExport> = report.entries.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
