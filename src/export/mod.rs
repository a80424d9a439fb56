// src/export/mod.rs

pub mod csv;
pub(crate) mod fs_utils;
pub mod json;
pub mod model;

pub use model::{EntryExport, ProjectExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed ({rows} rows): {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which dataset to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportData {
    Entries,
    Projects,
}

impl ExportData {
    pub fn label(&self) -> &'static str {
        match self {
            ExportData::Entries => "Entries",
            ExportData::Projects => "Projects",
        }
    }
}
