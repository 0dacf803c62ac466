// src/ingest/delimited.rs

use crate::errors::AppResult;
use csv::ReaderBuilder;
use std::path::Path;

/// Legge un CSV esportato dall'orologio marcatempo, header incluso come prima riga.
pub(crate) fn read_csv(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Vec::new();
    for record in rdr.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }

    Ok(grid)
}
