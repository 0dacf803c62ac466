use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouper::unique_names;
use crate::errors::AppResult;
use crate::ingest::load_table;
use crate::utils::formatting::bold;

/// Names shown before the "more" hint.
const VISIBLE_NAMES: usize = 10;

/// Handle the `report` subcommand: employee names found in the sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { input, sheet, all } = cmd {
        let sheet_name = sheet.as_deref().unwrap_or(&cfg.sheet_name);
        let table = load_table(input, sheet_name)?;
        let names = unique_names(&table)?;

        println!("{} {}", bold("Employees:"), names.len());

        let shown = if *all { names.len() } else { VISIBLE_NAMES };
        for name in names.iter().take(shown) {
            println!("  {name}");
        }

        let hidden = names.len().saturating_sub(shown);
        if hidden > 0 {
            println!("  … and {hidden} more (use --all to show them)");
        }
    }
    Ok(())
}
