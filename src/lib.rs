//! rTimesheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.
//!
//! Pipeline: ingest → normalize → group → pair → summarize → export.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (--config vince sul percorso standard)
    let cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
