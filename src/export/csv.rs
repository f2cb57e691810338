// src/export/csv.rs

use crate::errors::AppResult;
use crate::export::model::Tabular;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write one header row and one row per record.
///
/// A field is quoted only when it contains a comma, a quote or a line break;
/// embedded quotes are doubled.
pub fn write_csv<T: Tabular, W: Write>(records: &[T], out: W) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(T::headers())?;

    for record in records {
        wtr.write_record(record.to_row())?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_csv<T: Tabular>(records: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(records, file)?;

    notify_export_success("CSV", path);
    Ok(())
}
