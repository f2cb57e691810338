//! Staff attendance log: filtered listing, add form, CSV export.

use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::export::write_csv;
use crate::models::{AttendanceDraft, AttendanceEntry, Category};
use crate::storage::KeyValueStore;
use chrono::NaiveDateTime;
use std::io::Write;
use uuid::Uuid;

/// Listing filter. Empty / `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub name: String,
    pub category: Option<Category>,
    pub date: Option<String>,
}

impl AttendanceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, q: impl Into<String>) -> Self {
        self.name = q.into();
        self
    }

    pub fn category(mut self, c: Category) -> Self {
        self.category = Some(c);
        self
    }

    pub fn date(mut self, d: impl Into<String>) -> Self {
        self.date = Some(d.into());
        self
    }

    /// Case-insensitive name substring AND exact category AND exact date.
    pub fn matches(&self, entry: &AttendanceEntry) -> bool {
        let q = self.name.to_lowercase();
        let match_name = entry.nama.to_lowercase().contains(&q);
        let match_category = self.category.is_none_or(|c| entry.tipe == c);
        let match_date = self
            .date
            .as_deref()
            .is_none_or(|d| d.is_empty() || entry.tanggal == d);
        match_name && match_category && match_date
    }
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    pub fn list<'a, S: KeyValueStore>(
        store: &'a RecordStore<S>,
        filter: &AttendanceFilter,
    ) -> Vec<&'a AttendanceEntry> {
        store
            .attendance()
            .iter()
            .filter(|e| filter.matches(e))
            .collect()
    }

    /// Validate the draft, stamp id and time, prepend and persist.
    ///
    /// Returns `None` (and touches nothing) when the name or the date is
    /// empty.
    pub fn add<S: KeyValueStore>(
        store: &mut RecordStore<S>,
        draft: AttendanceDraft,
        now: NaiveDateTime,
    ) -> AppResult<Option<AttendanceEntry>> {
        let nama = draft.nama.trim();
        let tanggal = draft.tanggal.trim();
        if nama.is_empty() || tanggal.is_empty() {
            return Ok(None);
        }

        let entry = AttendanceEntry {
            id: Uuid::new_v4().to_string(),
            tanggal: tanggal.to_string(),
            waktu: now.format("%H:%M").to_string(),
            nama: nama.to_string(),
            tipe: draft.tipe,
            status: draft.status,
            keterangan: draft.keterangan.trim().to_string(),
        };

        store.prepend_attendance(entry.clone());
        store.save_all()?;

        Ok(Some(entry))
    }

    /// Write the full, unfiltered list as CSV.
    pub fn export_csv<S: KeyValueStore, W: Write>(
        store: &RecordStore<S>,
        out: W,
    ) -> AppResult<usize> {
        write_csv(store.attendance(), out)?;
        Ok(store.attendance().len())
    }
}
