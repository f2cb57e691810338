use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Staff category of an attendance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Teacher
    Guru,
    /// Administrative staff
    Pegawai,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Guru => "guru",
            Category::Pegawai => "pegawai",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Guru => "Guru",
            Category::Pegawai => "Pegawai",
        }
    }
}
