//! Turns the raw uploaded sheet into typed attendance events.

use crate::errors::{AppError, AppResult};
use crate::ingest::RawTable;
use crate::models::attendance_event::AttendanceEvent;

pub const COL_DATE: &str = "Ngày";
pub const COL_NAME: &str = "Tên";
pub const COL_SHIFT: &str = "Vào/Tan Ca";
pub const COL_BRANCH: &str = "Chi nhánh";

/// Columns every export must carry, in output order.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_DATE, COL_NAME, COL_SHIFT, COL_BRANCH];

/// Validate the header and map every data row to an [`AttendanceEvent`].
///
/// - no header row → `EmptyInput`
/// - a required header missing → `Schema(<column>)`, nothing is emitted
/// - rows with an empty "Tên" are skipped (separator / blank lines)
pub fn normalize(table: &RawTable) -> AppResult<Vec<AttendanceEvent>> {
    if table.headers.iter().all(|h| h.trim().is_empty()) {
        return Err(AppError::EmptyInput);
    }

    let mut idx = [0usize; 4];
    for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = table
            .headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| AppError::Schema(name.to_string()))?;
    }
    let [date_i, name_i, shift_i, branch_i] = idx;

    let events = (0..table.rows.len())
        .filter_map(|r| {
            let name = table.cell(r, name_i).trim();
            if name.is_empty() {
                return None;
            }
            Some(AttendanceEvent::new(
                table.cell(r, date_i).trim(),
                name,
                table.cell(r, shift_i).trim(),
                table.cell(r, branch_i).trim(),
            ))
        })
        .collect();

    Ok(events)
}
