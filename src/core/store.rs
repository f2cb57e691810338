//! The record store: both persisted lists, loaded from and written back to a
//! key-value backend.

use crate::errors::AppResult;
use crate::models::{AttendanceEntry, VisitorEntry};
use crate::storage::{
    APP_DATA_VERSION, KEY_ATTENDANCE, KEY_VERSION, KEY_VISITORS, KeyValueStore,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The two persisted record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Attendance,
    Visitor,
}

impl RecordKind {
    pub fn key(&self) -> &'static str {
        match self {
            RecordKind::Attendance => KEY_ATTENDANCE,
            RecordKind::Visitor => KEY_VISITORS,
        }
    }
}

/// A persisted entry type, tied to the storage key its list lives under.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KIND: RecordKind;

    fn id(&self) -> &str;
}

impl Record for AttendanceEntry {
    const KIND: RecordKind = RecordKind::Attendance;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for VisitorEntry {
    const KIND: RecordKind = RecordKind::Visitor;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Read one list from the backend.
///
/// An absent key, a backend failure or content that is not a JSON array
/// yield an empty list. Inside an array, entries are decoded one by one and
/// an entry that does not decode as `T` is skipped on its own.
pub fn load<T: Record, S: KeyValueStore + ?Sized>(kv: &S) -> Vec<T> {
    let raw = match kv.get(T::KIND.key()) {
        Ok(Some(raw)) => raw,
        _ => return Vec::new(),
    };
    match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(values) => values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Owns the backend plus the in-memory copy of both lists.
///
/// Lists are kept newest first.
pub struct RecordStore<S: KeyValueStore> {
    kv: S,
    attendance: Vec<AttendanceEntry>,
    visitors: Vec<VisitorEntry>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Load both lists and stamp the data version.
    pub fn open(mut kv: S) -> AppResult<Self> {
        let attendance = load::<AttendanceEntry, S>(&kv);
        let visitors = load::<VisitorEntry, S>(&kv);
        kv.set(KEY_VERSION, APP_DATA_VERSION)?;

        Ok(Self {
            kv,
            attendance,
            visitors,
        })
    }

    /// Re-read one list straight from the backend.
    pub fn load<T: Record>(&self) -> Vec<T> {
        load::<T, S>(&self.kv)
    }

    /// Replace both stored lists with the in-memory ones.
    ///
    /// The two writes are independent: a failure on the second leaves the
    /// first already written.
    pub fn save_all(&mut self) -> AppResult<()> {
        let attendance = serde_json::to_string(&self.attendance)?;
        let visitors = serde_json::to_string(&self.visitors)?;
        self.kv.set(KEY_ATTENDANCE, &attendance)?;
        self.kv.set(KEY_VISITORS, &visitors)?;
        Ok(())
    }

    pub fn version(&self) -> Option<String> {
        self.kv.get(KEY_VERSION).ok().flatten()
    }

    pub fn attendance(&self) -> &[AttendanceEntry] {
        &self.attendance
    }

    pub fn visitors(&self) -> &[VisitorEntry] {
        &self.visitors
    }

    pub fn find_visitor(&self, id: &str) -> Option<&VisitorEntry> {
        self.visitors.iter().find(|v| v.id() == id)
    }

    pub(crate) fn prepend_attendance(&mut self, entry: AttendanceEntry) {
        self.attendance.insert(0, entry);
    }

    pub(crate) fn prepend_visitor(&mut self, entry: VisitorEntry) {
        self.visitors.insert(0, entry);
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    pub fn into_backend(self) -> S {
        self.kv
    }
}
