// src/export/model.rs

use crate::core::normalizer::REQUIRED_COLUMNS;
use crate::models::processed_row::ProcessedRow;

pub const COL_HOURS: &str = "Giờ lương";

/// Column widths of the output sheet, in character units.
pub const COLUMN_WIDTHS: [f64; 5] = [15.0, 20.0, 25.0, 20.0, 15.0];

/// Header per XLSX / JSON
pub fn get_headers() -> Vec<&'static str> {
    let mut headers = REQUIRED_COLUMNS.to_vec();
    headers.push(COL_HOURS);
    headers
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Blank,
    Text(String),
    Number(f64),
}

/// Convert a data row into the five output cells.
/// Anomaly markers only fill the "Ngày" column.
pub fn row_to_cells(row: &ProcessedRow) -> [Cell; 5] {
    match row {
        ProcessedRow::Shift { event, hours } => [
            Cell::Text(event.raw_timestamp.clone()),
            Cell::Text(event.employee_name.clone()),
            Cell::Text(event.kind.as_source().to_string()),
            Cell::Text(event.branch.clone()),
            hours.map(Cell::Number).unwrap_or(Cell::Blank),
        ],
        ProcessedRow::Anomaly(kind) => [
            Cell::Text(kind.label().to_string()),
            Cell::Blank,
            Cell::Blank,
            Cell::Blank,
            Cell::Blank,
        ],
    }
}
