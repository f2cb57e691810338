//! Key-value persistence: the flat string namespace the record store lives in.

pub mod kv;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod sqlite;

pub use kv::{APP_DATA_VERSION, KEY_ATTENDANCE, KEY_VERSION, KEY_VISITORS, KeyValueStore};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
