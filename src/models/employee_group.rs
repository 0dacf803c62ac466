use super::attendance_event::AttendanceEvent;

/// All events of one employee, keyed case-insensitively.
#[derive(Debug, Clone)]
pub struct EmployeeGroup {
    pub key: String,
    /// First spelling seen for `key`; never overwritten.
    pub display_name: String,
    /// Input order. Sorting belongs to the pairing engine.
    pub events: Vec<AttendanceEvent>,
}

impl EmployeeGroup {
    pub fn new(first: AttendanceEvent) -> Self {
        Self {
            key: first.employee_key(),
            display_name: first.employee_name.clone(),
            events: vec![first],
        }
    }
}
