// src/export/mod.rs

mod fs_utils;
mod json;
pub mod logic;
pub mod model;
pub mod sheet_name;
mod xlsx;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use crate::utils::date::file_stamp;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

/// `<prefix>_dd_mm_yyyy.<ext>`, e.g. `Bảng_lương_nhân_viên_Ori_13_02_2025.xlsx`
pub fn default_file_name(prefix: &str, date: &NaiveDate, format: ExportFormat) -> String {
    format!("{prefix}_{}.{}", file_stamp(date), format.as_str())
}
