use super::{category::Category, status::Status};
use serde::{Deserialize, Serialize};

/// One persisted staff attendance record.
///
/// Field names follow the stored JSON layout (`data.presensi.v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub id: String,
    pub tanggal: String, // YYYY-MM-DD
    pub waktu: String,   // HH:MM
    pub nama: String,
    pub tipe: Category,
    pub status: Status,
    #[serde(default)]
    pub keterangan: String,
}

/// Values collected by the add form, before id and time are assigned.
#[derive(Debug, Clone)]
pub struct AttendanceDraft {
    pub nama: String,
    pub tipe: Category,
    pub status: Status,
    pub tanggal: String,
    pub keterangan: String,
}

impl AttendanceDraft {
    pub fn new(nama: impl Into<String>, tanggal: impl Into<String>) -> Self {
        Self {
            nama: nama.into(),
            tipe: Category::Guru,
            status: Status::Hadir,
            tanggal: tanggal.into(),
            keterangan: String::new(),
        }
    }

    pub fn with_category(mut self, tipe: Category) -> Self {
        self.tipe = tipe;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_remark(mut self, keterangan: impl Into<String>) -> Self {
        self.keterangan = keterangan.into();
        self
    }
}
