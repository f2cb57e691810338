//! The local "now" used to stamp entries.

use chrono::NaiveDateTime;

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
