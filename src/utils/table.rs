//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table whose column widths fit the widest cell of each column.
    pub fn fitted(headers: &[String], rows: &[Vec<String>]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let widest = rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .max()
                    .unwrap_or(0);
                Column {
                    header: h.clone(),
                    width: widest.max(UnicodeWidthStr::width(h.as_str())),
                }
            })
            .collect();

        let mut table = Self::new(columns);
        for row in rows {
            table.add_row(row.clone());
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_cell(&col.header, col.width));
        }
        out.push('\n');

        // Rows (short rows are padded with blanks)
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_cell(cell, col.width));
            }
            out.push('\n');
        }

        out
    }
}

/// `format!("{:<w$}")` pads by chars; Vietnamese diacritics need display width.
fn pad_cell(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{} ", s, " ".repeat(pad))
}
