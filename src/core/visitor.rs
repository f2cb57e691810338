//! Visitor book: filtered listing, form submit with signature, CSV export.

use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::export::write_csv;
use crate::models::{VisitorEntry, VisitorForm};
use crate::signature::SignatureCapture;
use crate::storage::KeyValueStore;
use chrono::NaiveDateTime;
use std::io::Write;
use uuid::Uuid;

/// Listing filter over "name organization" and date.
#[derive(Debug, Clone, Default)]
pub struct VisitorFilter {
    pub query: String,
    pub date: Option<String>,
}

impl VisitorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    pub fn date(mut self, d: impl Into<String>) -> Self {
        self.date = Some(d.into());
        self
    }

    pub fn matches(&self, entry: &VisitorEntry) -> bool {
        let haystack = format!("{} {}", entry.nama, entry.instansi).to_lowercase();
        let match_q = haystack.contains(&self.query.to_lowercase());
        let match_date = self
            .date
            .as_deref()
            .is_none_or(|d| d.is_empty() || entry.tanggal == d);
        match_q && match_date
    }
}

pub struct VisitorLogic;

impl VisitorLogic {
    pub fn list<'a, S: KeyValueStore>(
        store: &'a RecordStore<S>,
        filter: &VisitorFilter,
    ) -> Vec<&'a VisitorEntry> {
        store
            .visitors()
            .iter()
            .filter(|e| filter.matches(e))
            .collect()
    }

    /// Store a visit stamped with `now`.
    ///
    /// The signature is exported only when something was drawn; otherwise
    /// `ttd` is left empty. The pad is cleared afterwards so the next visitor
    /// starts on a fresh surface. Returns `None` when the name is empty.
    pub fn submit<S: KeyValueStore>(
        store: &mut RecordStore<S>,
        form: &VisitorForm,
        pad: &mut dyn SignatureCapture,
        now: NaiveDateTime,
    ) -> AppResult<Option<VisitorEntry>> {
        let nama = form.nama.trim();
        if nama.is_empty() {
            return Ok(None);
        }

        let ttd = if pad.is_empty() {
            String::new()
        } else {
            pad.export()
        };

        let entry = VisitorEntry {
            id: Uuid::new_v4().to_string(),
            tanggal: now.format("%Y-%m-%d").to_string(),
            waktu: now.format("%H:%M").to_string(),
            nama: nama.to_string(),
            instansi: form.instansi.trim().to_string(),
            keperluan: form.keperluan.trim().to_string(),
            ttd,
        };

        store.prepend_visitor(entry.clone());
        store.save_all()?;
        pad.clear();

        Ok(Some(entry))
    }

    /// Write the full, unfiltered list as CSV.
    pub fn export_csv<S: KeyValueStore, W: Write>(
        store: &RecordStore<S>,
        out: W,
    ) -> AppResult<usize> {
        write_csv(store.visitors(), out)?;
        Ok(store.visitors().len())
    }
}
