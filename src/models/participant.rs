use serde::Serialize;

/// An exam participant read from a spreadsheet row. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub no: usize,
    pub nis: String,
    pub nama: String,
    pub ruang: String,
    pub kelas: String,
    pub keterangan: String,
    pub hadir: bool,
}
