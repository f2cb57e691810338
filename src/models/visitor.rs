use serde::{Deserialize, Serialize};

/// One persisted visitor book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorEntry {
    pub id: String,
    pub tanggal: String,
    pub waktu: String,
    pub nama: String,
    #[serde(default)]
    pub instansi: String,
    #[serde(default)]
    pub keperluan: String,
    /// PNG data URI, or "" when nothing was drawn.
    #[serde(default)]
    pub ttd: String,
}

impl VisitorEntry {
    pub fn has_signature(&self) -> bool {
        !self.ttd.is_empty()
    }
}

/// Text fields of the visitor form.
#[derive(Debug, Clone, Default)]
pub struct VisitorForm {
    pub nama: String,
    pub instansi: String,
    pub keperluan: String,
}

impl VisitorForm {
    pub fn new(nama: impl Into<String>) -> Self {
        Self {
            nama: nama.into(),
            ..Self::default()
        }
    }

    pub fn with_organization(mut self, instansi: impl Into<String>) -> Self {
        self.instansi = instansi.into();
        self
    }

    pub fn with_purpose(mut self, keperluan: impl Into<String>) -> Self {
        self.keperluan = keperluan.into();
        self
    }
}
