use super::attendance_event::AttendanceEvent;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnomalyKind {
    MissingClockIn,
    MissingClockOut,
}

impl AnomalyKind {
    /// Marker text written in the date column of the worksheet.
    pub fn label(&self) -> &'static str {
        match self {
            AnomalyKind::MissingClockIn => "Không chấm vào ca",
            AnomalyKind::MissingClockOut => "Không chấm tan ca",
        }
    }
}

/// One data line of an employee worksheet.
#[derive(Debug, Clone, Serialize)]
pub enum ProcessedRow {
    /// A scan as it appears in the sheet. Only clock-ins carry hours.
    Shift {
        event: AttendanceEvent,
        hours: Option<f64>,
    },
    Anomaly(AnomalyKind),
}

impl ProcessedRow {
    pub fn hours(&self) -> Option<f64> {
        match self {
            ProcessedRow::Shift { hours, .. } => *hours,
            ProcessedRow::Anomaly(_) => None,
        }
    }

    pub fn anomaly(&self) -> Option<AnomalyKind> {
        match self {
            ProcessedRow::Anomaly(kind) => Some(*kind),
            ProcessedRow::Shift { .. } => None,
        }
    }

    pub fn is_anomaly(&self) -> bool {
        self.anomaly().is_some()
    }
}
