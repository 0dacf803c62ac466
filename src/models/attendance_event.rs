use super::event_kind::EventKind;
use crate::utils::date::parse_clock_timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One normalized row of the time-clock export.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub raw_timestamp: String,            // ⇔ "Ngày" as found in the sheet
    pub timestamp: Option<NaiveDateTime>, // None when "Ngày" is not dd/mm/yyyy hh:mm
    pub employee_name: String,            // ⇔ "Tên", original case
    pub kind: EventKind,                  // ⇔ "Vào/Tan Ca"
    pub branch: String,                   // ⇔ "Chi nhánh"
}

impl AttendanceEvent {
    pub fn new(raw_timestamp: &str, employee_name: &str, kind: &str, branch: &str) -> Self {
        Self {
            raw_timestamp: raw_timestamp.to_string(),
            timestamp: parse_clock_timestamp(raw_timestamp),
            employee_name: employee_name.to_string(),
            kind: EventKind::from_source(kind),
            branch: branch.to_string(),
        }
    }

    /// Grouping identity of the employee.
    pub fn employee_key(&self) -> String {
        self.employee_name.to_lowercase()
    }
}
