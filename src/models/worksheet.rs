use super::processed_row::ProcessedRow;
use crate::core::summary::PayrollSummary;
use serde::Serialize;

/// Everything the emitters need to render one employee sheet.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeWorksheet {
    pub display_name: String,
    pub rows: Vec<ProcessedRow>,
    pub summary: PayrollSummary,
}

impl EmployeeWorksheet {
    pub fn anomaly_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_anomaly()).count()
    }

    /// Clock-ins that were paired with a clock-out but got no hours
    /// (bad timestamp or beyond the shift cutoff).
    pub fn blank_pairings(&self) -> usize {
        self.rows
            .windows(2)
            .filter(|w| match (&w[0], &w[1]) {
                (
                    ProcessedRow::Shift { event: a, hours: None },
                    ProcessedRow::Shift { event: b, .. },
                ) => a.kind.is_in() && b.kind.is_out(),
                _ => false,
            })
            .count()
    }
}
