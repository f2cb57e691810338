pub mod attendance;
pub mod config;
pub mod guest;
pub mod init;
pub mod log;
pub mod roll;
pub mod seating;

use crate::config::Config;
use crate::core::RecordStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::storage::SqliteStore;

/// Open the configured database as a record store.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteStore>> {
    let kv = SqliteStore::open(&cfg.database)?;
    RecordStore::open(kv)
}

/// `stem` + the extension of `format`.
pub(crate) fn default_file_name(stem: &str, format: ExportFormat) -> String {
    format!("{stem}.{}", format.as_str())
}
