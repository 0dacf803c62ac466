// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, default_file_name};
use crate::ingest::load_table;
use crate::models::worksheet::EmployeeWorksheet;
use crate::ui::messages::{info, warning};
use crate::utils::date::today;
use crate::utils::formatting::{format_amount, format_hours};
use crate::utils::table::{Column, Table};
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Read `input`, build one worksheet per employee and write the workbook.
    ///
    /// - `file`: output path; defaults to `<output_dir>/<prefix>_dd_mm_yyyy.<ext>`
    /// - `force`: overwrite without asking
    ///
    /// Returns the path written.
    pub fn export(
        input: &Path,
        file: Option<&Path>,
        format: ExportFormat,
        force: bool,
        cfg: &Config,
    ) -> AppResult<PathBuf> {
        let table = load_table(input, &cfg.sheet_name)?;
        let sheets = Core::build_worksheets(&table, cfg)?;

        if sheets.is_empty() {
            return Err(AppError::Export(
                "no employee rows found: nothing to export".to_string(),
            ));
        }

        report_sheets(&sheets);

        let path = match file {
            Some(p) => p.to_path_buf(),
            None => Path::new(&cfg.output_dir).join(default_file_name(
                &cfg.file_prefix,
                &today(),
                format,
            )),
        };

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(&sheets, &path)?,
            ExportFormat::Json => export_json(&sheets, &path)?,
        }

        Ok(path)
    }
}

/// Per-employee recap on the terminal, plus warnings for broken scans.
fn report_sheets(sheets: &[EmployeeWorksheet]) {
    info(format!("{} employee sheet(s) to export", sheets.len()));

    let mut table = Table::new(vec![
        Column {
            header: "Tên".into(),
            width: 24,
        },
        Column {
            header: "Giờ lương".into(),
            width: 10,
        },
        Column {
            header: "Thực lãnh".into(),
            width: 14,
        },
        Column {
            header: "Anomalies".into(),
            width: 9,
        },
    ]);

    for s in sheets {
        let preview = &s.summary.preview;
        table.add_row(vec![
            s.display_name.clone(),
            format_hours(Some(preview.total_hours)),
            format_amount(preview.net_pay),
            s.anomaly_count().to_string(),
        ]);
    }
    print!("{}", table.render());

    for s in sheets {
        let anomalies = s.anomaly_count();
        if anomalies > 0 {
            warning(format!(
                "{}: {anomalies} missing clock-in/clock-out marker(s)",
                s.display_name
            ));
        }

        let blanks = s.blank_pairings();
        if blanks > 0 {
            warning(format!(
                "{}: {blanks} shift(s) left without hours (bad timestamp or longer than the cutoff)",
                s.display_name
            ));
        }
    }
}
