// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check whether a file can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}

/// Resolve the target of an export.
///
/// No file → `default_name` inside `export_dir`; a relative file is placed
/// inside `export_dir`; `~/` is expanded.
pub fn resolve_output_path(file: Option<&str>, default_name: &str, export_dir: &str) -> PathBuf {
    let base = expand_tilde(export_dir);

    match file {
        None => base.join(default_name),
        Some(f) => {
            let p = expand_tilde(f);
            if p.is_absolute() { p } else { base.join(p) }
        }
    }
}
