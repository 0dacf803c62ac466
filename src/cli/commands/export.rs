use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        file,
        format,
        sheet,
        rate,
        advance,
        force,
    } = cmd
    {
        // command-line values win over the config file
        let mut cfg = cfg.clone();
        if let Some(s) = sheet {
            cfg.sheet_name = s.clone();
        }
        if let Some(r) = rate {
            cfg.hourly_rate = *r;
        }
        if let Some(a) = advance {
            cfg.advance = *a;
        }

        ExportLogic::export(input, file.as_deref(), *format, *force, &cfg)?;
    }
    Ok(())
}
