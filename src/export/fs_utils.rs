// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Make sure the workbook can be written to `path`.
///
/// - missing file, or `force` → Ok
/// - existing file, interactive terminal → ask before overwriting
/// - existing file, no terminal (scripts, pipes) → refuse, suggest `--force`
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !io::stdin().is_terminal() {
        return Err(AppError::Export(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        )),
    }
}
