//! First-sheet reader: header row → row objects → participants.

use crate::errors::{AppError, AppResult};
use crate::import::presence::parse_presence;
use crate::models::Participant;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// One data row keyed by header text.
pub type Row = HashMap<String, Data>;

/// Which page the rows are mapped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportVariant {
    /// Seating roster: remark comes from `Presensi`, then `Keterangan`.
    Seating,
    /// Attendance roll: remark from `Keterangan` / `Ket`, presence from
    /// `Hadir` / `Presensi`.
    Roll,
}

/// Read the first sheet into header-keyed rows.
///
/// Fully blank rows are skipped; cells missing from a short row are `Empty`.
pub fn read_rows(bytes: &[u8]) -> AppResult<Vec<Row>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| AppError::Import(e.to_string()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r.map_err(|e| AppError::Import(e.to_string()))?,
        None => return Ok(Vec::new()),
    };

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header
        .iter()
        .map(|c| cell_to_string(c).trim().to_string())
        .collect();

    let mut out = Vec::new();
    for row in rows {
        if row.iter().all(|c| cell_to_string(c).trim().is_empty()) {
            continue;
        }

        let mut map = Row::new();
        for (i, h) in headers.iter().enumerate() {
            if h.is_empty() {
                continue;
            }
            map.entry(h.clone())
                .or_insert_with(|| row.get(i).cloned().unwrap_or(Data::Empty));
        }
        out.push(map);
    }

    Ok(out)
}

/// Render a cell as text. Whole floats lose their `.0`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

/// First column among `keys` holding a non-empty value.
fn first_text(row: &Row, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .map(cell_to_string)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

fn first_cell<'a>(row: &'a Row, keys: &[&str]) -> Option<&'a Data> {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .find(|c| !cell_to_string(c).is_empty())
}

/// Map one row; `index` is 0-based row order.
pub fn map_row(row: &Row, index: usize, variant: ImportVariant) -> Participant {
    let (keterangan, hadir) = match variant {
        ImportVariant::Seating => (first_text(row, &["Presensi", "Keterangan"]), false),
        ImportVariant::Roll => (
            first_text(row, &["Keterangan", "Ket"]),
            first_cell(row, &["Hadir", "Presensi"]).is_some_and(parse_presence),
        ),
    };

    Participant {
        no: index + 1,
        nis: first_text(row, &["NIS"]),
        nama: first_text(row, &["Nama Siswa", "Nama"]),
        ruang: first_text(row, &["Ruang"]),
        kelas: first_text(row, &["Kelas"]),
        keterangan,
        hadir,
    }
}

/// Parse spreadsheet bytes into participants.
///
/// Unreadable or empty input yields an empty list.
pub fn import_participants(bytes: &[u8], variant: ImportVariant) -> Vec<Participant> {
    read_rows(bytes)
        .map(|rows| {
            rows.iter()
                .enumerate()
                .map(|(i, row)| map_row(row, i, variant))
                .collect()
        })
        .unwrap_or_default()
}

/// Read a spreadsheet file; only a missing/unreadable file is an error.
pub fn import_file(path: &Path, variant: ImportVariant) -> AppResult<Vec<Participant>> {
    let bytes = fs::read(path)?;
    Ok(import_participants(&bytes, variant))
}
