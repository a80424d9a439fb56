use crate::core::entries::{EntriesLogic, EntryFilter};
use crate::core::projects::ProjectsLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, require_absolute};
use crate::export::model::projects_to_rows;
use crate::export::csv::write_csv;
use crate::export::json::write_json;
use crate::export::{EntryExport, ExportData, ExportFormat, notify_export_success};
use crate::models::iso_week::MonthKey;
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export entries or the project table.
    ///
    /// - `month`: only entries filed under that month / projects assigned to it
    /// - `file`: absolute output path
    ///
    /// Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        data: ExportData,
        format: ExportFormat,
        file: &str,
        month: Option<MonthKey>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        require_absolute(path)?;
        ensure_writable(path, force)?;

        let written = match data {
            ExportData::Entries => {
                let filter = EntryFilter {
                    month,
                    worker: None,
                };
                let rows: Vec<EntryExport> = EntriesLogic::list(pool, &filter)?
                    .iter()
                    .map(EntryExport::from)
                    .collect();
                write_rows(format, path, &rows)?
            }
            ExportData::Projects => {
                let projects = ProjectsLogic::list(pool, month)?;
                let mut rows = projects_to_rows(&projects);
                if let Some(m) = month {
                    let m = m.to_string();
                    rows.retain(|r| r.month == m);
                }
                write_rows(format, path, &rows)?
            }
        };

        if written == 0 {
            warning("No rows found for the selected filter. Nothing to export.");
            return Ok(0);
        }

        ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} rows of {} to {}", written, data.label(), path.display()),
        )?;
        notify_export_success(data.label(), written, path);
        Ok(written)
    }
}

fn write_rows<T: Serialize>(format: ExportFormat, path: &Path, rows: &[T]) -> AppResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }
    match format {
        ExportFormat::Csv => write_csv(path, rows)?,
        ExportFormat::Json => write_json(path, rows)?,
    }
    Ok(rows.len())
}
