// src/export/model.rs

use crate::models::{AttendanceEntry, Participant, VisitorEntry};

/// A record that can be flattened into one row of a table with fixed headers.
pub trait Tabular {
    fn headers() -> &'static [&'static str];

    fn to_row(&self) -> Vec<String>;

    /// Columns holding a date or a time of day; spreadsheets store these as
    /// serials, every other column stays text.
    fn date_columns() -> &'static [usize] {
        &[]
    }
}

impl Tabular for AttendanceEntry {
    fn headers() -> &'static [&'static str] {
        &["Tanggal", "Waktu", "Nama", "Tipe", "Status", "Keterangan"]
    }

    fn date_columns() -> &'static [usize] {
        &[0, 1]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.tanggal.clone(),
            self.waktu.clone(),
            self.nama.clone(),
            self.tipe.as_str().to_string(),
            self.status.as_str().to_string(),
            self.keterangan.clone(),
        ]
    }
}

impl Tabular for VisitorEntry {
    fn headers() -> &'static [&'static str] {
        &["Tanggal", "Waktu", "Nama", "Instansi", "Keperluan"]
    }

    fn date_columns() -> &'static [usize] {
        &[0, 1]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.tanggal.clone(),
            self.waktu.clone(),
            self.nama.clone(),
            self.instansi.clone(),
            self.keperluan.clone(),
        ]
    }
}

impl Tabular for Participant {
    fn headers() -> &'static [&'static str] {
        &["No.", "NIS", "Nama", "Ruang", "Kelas", "Keterangan", "Hadir"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.no.to_string(),
            self.nis.clone(),
            self.nama.clone(),
            self.ruang.clone(),
            self.kelas.clone(),
            self.keterangan.clone(),
            if self.hadir { "Hadir" } else { "Tidak Hadir" }.to_string(),
        ]
    }
}

/// Convert records into a table of strings.
pub(crate) fn to_table<T: Tabular>(records: &[T]) -> Vec<Vec<String>> {
    records.iter().map(Tabular::to_row).collect()
}
