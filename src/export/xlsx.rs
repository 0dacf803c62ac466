// src/export/xlsx.rs

use crate::core::summary::{SheetLayout, SummaryValue};
use crate::errors::AppResult;
use crate::export::model::{COLUMN_WIDTHS, Cell, get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::export::sheet_name::sheet_names;
use crate::models::worksheet::EmployeeWorksheet;
use crate::ui::messages::info;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// One sheet per employee: header, data rows, then the five wage rows.
pub(crate) fn export_xlsx(sheets: &[EmployeeWorksheet], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = build_workbook(sheets)?;
    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

pub(crate) fn build_workbook(sheets: &[EmployeeWorksheet]) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();
    let names = sheet_names(sheets.iter().map(|s| s.display_name.as_str()));

    for (sheet, name) in sheets.iter().zip(names) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&name)?;
        write_sheet(worksheet, sheet)?;
    }

    Ok(workbook)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &EmployeeWorksheet) -> AppResult<()> {
    let layout = SheetLayout::default();
    let header_format = Format::new().set_bold();
    let hours_format = Format::new().set_num_format("0.0");

    // ---------------------------
    // Header
    // ---------------------------
    for (col, header) in get_headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // ---------------------------
    // Data rows
    // ---------------------------
    for (i, row) in sheet.rows.iter().enumerate() {
        let r = layout.header_rows + i as u32;

        for (col, cell) in row_to_cells(row).iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Blank => {}
                Cell::Text(s) => {
                    worksheet.write_string(r, col, s)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number_with_format(r, col, *n, &hours_format)?;
                }
            }
        }
    }

    // ---------------------------
    // Wage rows (labels left of the hours column)
    // ---------------------------
    let label_col = layout.hours_col - 1;
    for summary_row in sheet.summary.rows() {
        // SummaryRow.row is 1-based, the writer is 0-based
        let r = summary_row.row - 1;
        worksheet.write_string(r, label_col, summary_row.label)?;

        match &summary_row.value {
            SummaryValue::Formula(f) => {
                worksheet.write_formula(r, layout.hours_col, f.as_str())?;
            }
            SummaryValue::Number(n) => {
                worksheet.write_number_with_format(r, layout.hours_col, *n, &hours_format)?;
            }
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w)?;
    }

    Ok(())
}
