// src/ingest/workbook.rs

use crate::errors::{AppError, AppResult};
use crate::ingest::excel_date::excel_serial_to_datetime;
use crate::utils::date::{format_clock_timestamp, parse_iso_timestamp};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Legge il foglio `sheet_name` e lo converte in una griglia di stringhe.
pub(crate) fn read_sheet(path: &Path, sheet_name: &str) -> AppResult<Vec<Vec<String>>> {
    let mut wb = open_workbook_auto(path).map_err(|e| AppError::Workbook(e.to_string()))?;

    if !wb.sheet_names().iter().any(|n| n == sheet_name) {
        return Err(AppError::SheetNotFound(sheet_name.to_string()));
    }

    let range = wb
        .worksheet_range(sheet_name)
        .map_err(|e| AppError::Workbook(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(data_to_string).collect())
        .collect())
}

/// Cell → text, the way the sheet shows it. Date cells are rendered in the
/// clock export format so they parse like text cells.
fn data_to_string(v: &Data) -> String {
    match v {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::DateTime(dt) => excel_serial_to_datetime(dt.as_f64())
            .map(|d| format_clock_timestamp(&d))
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => parse_iso_timestamp(s)
            .map(|d| format_clock_timestamp(&d))
            .unwrap_or_else(|| s.clone()),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERROR:{:?}", e),
    }
}
