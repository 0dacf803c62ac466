//! Partition events per employee, ignoring case in names.

use crate::core::normalizer::COL_NAME;
use crate::errors::{AppError, AppResult};
use crate::ingest::RawTable;
use crate::models::attendance_event::AttendanceEvent;
use crate::models::employee_group::EmployeeGroup;
use std::collections::{HashMap, HashSet};

/// Groups come out in order of first appearance; events keep input order.
pub fn group_by_employee(events: Vec<AttendanceEvent>) -> Vec<EmployeeGroup> {
    let mut groups: Vec<EmployeeGroup> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for ev in events {
        let key = ev.employee_key();
        if let Some(&i) = by_key.get(&key) {
            groups[i].events.push(ev);
        } else {
            by_key.insert(key, groups.len());
            groups.push(EmployeeGroup::new(ev));
        }
    }

    groups
}

/// Distinct names of the "Tên" column as spelled in the sheet
/// (case-sensitive), first-seen order.
///
/// Only "Tên" is required here; the full column check belongs to export.
pub fn unique_names(table: &RawTable) -> AppResult<Vec<String>> {
    if table.headers.iter().all(|h| h.trim().is_empty()) {
        return Err(AppError::EmptyInput);
    }

    let name_i = table
        .headers
        .iter()
        .position(|h| h.trim() == COL_NAME)
        .ok_or_else(|| AppError::Schema(COL_NAME.to_string()))?;

    let mut seen = HashSet::new();
    Ok((0..table.rows.len())
        .map(|r| table.cell(r, name_i).trim())
        .filter(|n| !n.is_empty() && seen.insert(*n))
        .map(str::to_string)
        .collect())
}
