use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rTimesheet
/// CLI application turning time-clock exports into payroll worksheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pair clock-in/clock-out scans per employee and export a payroll workbook",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration as YAML")]
        print_config: bool,
    },

    /// Print the uploaded sheet as a table
    Show {
        #[arg(long, short, value_name = "FILE", help = "Time-clock export (.xlsx, .xls or .csv)")]
        input: PathBuf,

        #[arg(long, help = "Sheet to read (default from config: Cham_Cong)")]
        sheet: Option<String>,
    },

    /// List the employees found in the uploaded sheet
    Report {
        #[arg(long, short, value_name = "FILE", help = "Time-clock export (.xlsx, .xls or .csv)")]
        input: PathBuf,

        #[arg(long, help = "Sheet to read (default from config: Cham_Cong)")]
        sheet: Option<String>,

        #[arg(long = "all", help = "Show every name instead of the first 10")]
        all: bool,
    },

    /// Build the per-employee payroll workbook
    Export {
        #[arg(long, short, value_name = "FILE", help = "Time-clock export (.xlsx, .xls or .csv)")]
        input: PathBuf,

        #[arg(long, value_name = "FILE", help = "Output file (default: <prefix>_dd_mm_yyyy.<ext>)")]
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, help = "Sheet to read (default from config: Cham_Cong)")]
        sheet: Option<String>,

        #[arg(long, help = "Hourly rate written in the 'Lương mỗi giờ' row")]
        rate: Option<f64>,

        #[arg(long, help = "Advance written in the 'Tạm ứng' row")]
        advance: Option<f64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
