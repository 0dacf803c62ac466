pub mod attendance_event;
pub mod employee_group;
pub mod event_kind;
pub mod processed_row;
pub mod worksheet;
