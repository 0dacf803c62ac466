use serde::Serialize;

/// Source text for a clock-in scan.
pub const CLOCK_IN_TEXT: &str = "Vào Ca";
/// Source text for a clock-out scan.
pub const CLOCK_OUT_TEXT: &str = "Tan Ca";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum EventKind {
    ClockIn,
    ClockOut,
    /// Anything else found in the shift column. Kept for output, never paired.
    Other(String),
}

impl EventKind {
    /// Convert the (already trimmed) shift-column text → enum
    pub fn from_source(s: &str) -> Self {
        match s {
            CLOCK_IN_TEXT => Self::ClockIn,
            CLOCK_OUT_TEXT => Self::ClockOut,
            other => Self::Other(other.to_string()),
        }
    }

    /// Convert enum → text written back to the worksheet
    pub fn as_source(&self) -> &str {
        match self {
            EventKind::ClockIn => CLOCK_IN_TEXT,
            EventKind::ClockOut => CLOCK_OUT_TEXT,
            EventKind::Other(s) => s.as_str(),
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::ClockIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventKind::ClockOut)
    }
}
