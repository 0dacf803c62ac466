use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest::load_table;
use crate::ui::messages::header;
use crate::utils::table::Table;

/// Handle the `show` subcommand: the raw sheet, as uploaded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { input, sheet } = cmd {
        let sheet_name = sheet.as_deref().unwrap_or(&cfg.sheet_name);
        let table = load_table(input, sheet_name)?;

        header(format!("{} ({} rows)", sheet_name, table.rows.len()));
        print!("{}", Table::fitted(&table.headers, &table.rows).render());
    }
    Ok(())
}
