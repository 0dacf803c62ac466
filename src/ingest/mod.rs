// src/ingest/mod.rs

mod delimited;
mod excel_date;
mod workbook;

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Immutable snapshot of the uploaded sheet: header row + data rows,
/// every cell already trimmed. Handed as-is to the core.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build a snapshot from untrimmed grid lines (first line = header).
    /// Returns `None` when the grid has no lines at all.
    pub fn from_grid(grid: Vec<Vec<String>>) -> Option<Self> {
        let mut lines = grid
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.trim().to_string()).collect());

        let headers = lines.next()?;
        Some(Self {
            headers,
            rows: lines.collect(),
        })
    }

    /// Cell by row/column; blank when the row is shorter than the header.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Read the attendance sheet from `path`.
///
/// - `.xlsx` / `.xls` / `.xlsm` / `.ods` → the sheet named `sheet_name`
/// - `.csv` → the whole file
pub fn load_table(path: &Path, sheet_name: &str) -> AppResult<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let grid = match ext.as_str() {
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => workbook::read_sheet(path, sheet_name)?,
        "csv" => delimited::read_csv(path)?,
        _ => {
            return Err(AppError::UnsupportedInput(format!(
                "{} (expected .xlsx, .xls or .csv)",
                path.display()
            )));
        }
    };

    RawTable::from_grid(grid).ok_or(AppError::EmptyInput)
}
