use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Attendance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Present
    Hadir,
    /// Excused
    Izin,
    /// Sick
    Sakit,
    /// Absent without notice
    Alpha,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Hadir => "hadir",
            Status::Izin => "izin",
            Status::Sakit => "sakit",
            Status::Alpha => "alpha",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Hadir => "Hadir",
            Status::Izin => "Izin",
            Status::Sakit => "Sakit",
            Status::Alpha => "Alpha",
        }
    }
}
