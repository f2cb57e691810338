use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        print: true,
        operation,
    } = cmd
    {
        if !Path::new(&cfg.database).exists() {
            warning(format!(
                "Database {} not found: run `presensi init` first.",
                cfg.database
            ));
            return Ok(());
        }

        let store = SqliteStore::open(&cfg.database)?;
        LogLogic::print_log(store.conn(), operation.as_deref())?;
    }

    Ok(())
}
