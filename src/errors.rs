//! Unified application error type.
//! All modules (ingest, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Data-quality problems (broken pairings, unparseable timestamps) are NOT
//! errors: the pairing engine turns them into anomaly rows or blank hours.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Required column '{0}' not found in the uploaded file")]
    Schema(String),

    #[error("Sheet is empty!")]
    EmptyInput,

    #[error("Sheet '{0}' not found in the workbook")]
    SheetNotFound(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported input file: {0}")]
    UnsupportedInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
