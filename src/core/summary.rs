//! Wage rows appended below the data block of every employee sheet.
//!
//! Sheet layout (1-based rows, as Excel shows them):
//!
//! ```text
//! row 1          header
//! rows 2..=n+1   data rows (shifts + anomaly markers)
//! row n+2        Tổng giờ lương   SUM(E2:E{n+1})
//! row n+3        Lương mỗi giờ    rate
//! row n+4        Tổng lương       E{n+2}*E{n+3}
//! row n+5        Tạm ứng          advance
//! row n+6        Thực lãnh        E{n+4} - E{n+5}
//! ```
//!
//! Every row number is derived from `n` when the summary is built, so
//! inserted anomaly markers can never shift a formula off its target.

use crate::models::processed_row::ProcessedRow;
use serde::Serialize;

pub const LABEL_TOTAL_HOURS: &str = "Tổng giờ lương";
pub const LABEL_RATE: &str = "Lương mỗi giờ";
pub const LABEL_GROSS: &str = "Tổng lương";
pub const LABEL_ADVANCE: &str = "Tạm ứng";
pub const LABEL_NET: &str = "Thực lãnh";

pub const DEFAULT_HOURLY_RATE: f64 = 15000.0;
pub const DEFAULT_ADVANCE: f64 = 0.0;

/// Where the data block sits in the output sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    /// 0-based index of the "Giờ lương" column.
    pub hours_col: u16,
    /// Rows taken by the header above the data block.
    pub header_rows: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            hours_col: 4,
            header_rows: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRates {
    pub hourly_rate: f64,
    pub advance: f64,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
            advance: DEFAULT_ADVANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SummaryValue {
    Formula(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    /// 1-based sheet row.
    pub row: u32,
    pub value: SummaryValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollSummary {
    pub total_hours: SummaryRow,
    pub hourly_rate: SummaryRow,
    pub gross_pay: SummaryRow,
    pub advance: SummaryRow,
    pub net_pay: SummaryRow,
    /// What the formulas evaluate to before the payer edits anything.
    pub preview: PayPreview,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayPreview {
    pub total_hours: f64,
    pub gross_pay: f64,
    pub net_pay: f64,
}

impl PayrollSummary {
    /// Rows in sheet order.
    pub fn rows(&self) -> [&SummaryRow; 5] {
        [
            &self.total_hours,
            &self.hourly_rate,
            &self.gross_pay,
            &self.advance,
            &self.net_pay,
        ]
    }
}

/// Spreadsheet column letters for a 0-based index (0 → A, 25 → Z, 26 → AA).
pub fn column_letter(index: u16) -> String {
    let mut n = index as u32 + 1;
    let mut letters = Vec::new();

    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// Build the five wage rows for a data block of `rows.len()` lines.
pub fn build_summary(rows: &[ProcessedRow], layout: &SheetLayout, rates: &PayRates) -> PayrollSummary {
    let col = column_letter(layout.hours_col);

    let first_data_row = layout.header_rows + 1;
    let last_data_row = layout.header_rows + rows.len() as u32;

    let total_row = last_data_row + 1;
    let rate_row = total_row + 1;
    let gross_row = rate_row + 1;
    let advance_row = gross_row + 1;
    let net_row = advance_row + 1;

    let total_hours: f64 = rows.iter().filter_map(ProcessedRow::hours).sum();
    let gross_pay = total_hours * rates.hourly_rate;

    PayrollSummary {
        total_hours: SummaryRow {
            label: LABEL_TOTAL_HOURS,
            row: total_row,
            value: SummaryValue::Formula(format!(
                "SUM({col}{first_data_row}:{col}{last_data_row})"
            )),
        },
        hourly_rate: SummaryRow {
            label: LABEL_RATE,
            row: rate_row,
            value: SummaryValue::Number(rates.hourly_rate),
        },
        gross_pay: SummaryRow {
            label: LABEL_GROSS,
            row: gross_row,
            value: SummaryValue::Formula(format!("{col}{total_row}*{col}{rate_row}")),
        },
        advance: SummaryRow {
            label: LABEL_ADVANCE,
            row: advance_row,
            value: SummaryValue::Number(rates.advance),
        },
        net_pay: SummaryRow {
            label: LABEL_NET,
            row: net_row,
            value: SummaryValue::Formula(format!("{col}{gross_row} - {col}{advance_row}")),
        },
        preview: PayPreview {
            total_hours,
            gross_pay,
            net_pay: gross_pay - rates.advance,
        },
    }
}
