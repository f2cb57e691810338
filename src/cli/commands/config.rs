use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success, warning};
use std::env;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        header("Current configuration");
        info(format!("File: {}", path.display()));
        println!("{}", cfg.to_yaml()?);
    }

    if *edit_config {
        if !path.exists() {
            warning(format!(
                "{} does not exist yet: run `presensi init` to write the defaults.",
                path.display()
            ));
        }

        let candidates = editor_candidates(editor.as_deref());
        match edit_with_first_working(&path, &candidates) {
            Some(used) => success(format!("Configuration file edited successfully using '{used}'")),
            None => error(format!(
                "Failed to edit configuration file, tried: {}",
                candidates.join(", ")
            )),
        }
    }

    Ok(())
}

/// Editors to try, in order: the explicit one, `$EDITOR`, `$VISUAL`, then
/// the platform default. Blank values and repeats are dropped.
pub fn editor_candidates(explicit: Option<&str>) -> Vec<String> {
    let platform = if cfg!(target_os = "windows") { "notepad" } else { "nano" };

    let from_env = ["EDITOR", "VISUAL"].into_iter().filter_map(|k| env::var(k).ok());

    let mut out: Vec<String> = Vec::new();
    for name in explicit
        .map(str::to_string)
        .into_iter()
        .chain(from_env)
        .chain(std::iter::once(platform.to_string()))
    {
        let name = name.trim().to_string();
        if !name.is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

/// Run each editor on `path` until one exits successfully.
fn edit_with_first_working<'a>(path: &Path, candidates: &'a [String]) -> Option<&'a str> {
    for (i, name) in candidates.iter().enumerate() {
        match Command::new(name).arg(path).status() {
            Ok(s) if s.success() => return Some(name.as_str()),
            _ => {
                if let Some(next) = candidates.get(i + 1) {
                    warning(format!("Editor '{name}' not available, falling back to '{next}'"));
                }
            }
        }
    }
    None
}
