//! Participant spreadsheets (`.xlsx` / `.xls`).

pub mod presence;
pub mod spreadsheet;

pub use presence::{is_truthy, parse_presence};
pub use spreadsheet::{ImportVariant, import_file, import_participants, read_rows};
