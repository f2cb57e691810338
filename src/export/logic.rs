// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::Tabular;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// High-level export entry point shared by every record kind.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `path` in the requested format.
    ///
    /// The header row is written even when `records` is empty.
    pub fn export<T: Tabular + Serialize>(
        records: &[T],
        format: ExportFormat,
        path: &Path,
        sheet_name: &str,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if records.is_empty() {
            warning("No records stored yet: only the header will be written.");
        }

        match format {
            ExportFormat::Csv => export_csv(records, path)?,
            ExportFormat::Json => export_json(records, path)?,
            ExportFormat::Xlsx => export_xlsx(records, path, sheet_name)?,
        }

        Ok(())
    }
}
