// src/export/json.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::worksheet::EmployeeWorksheet;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (rows + wage rows with their formulas).
pub(crate) fn export_json(sheets: &[EmployeeWorksheet], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(sheets)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
