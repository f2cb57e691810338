pub mod attendance;
pub mod log;
pub mod roster;
pub mod store;
pub mod visitor;

pub use attendance::{AttendanceFilter, AttendanceLogic};
pub use roster::{Roll, RollCounts, SeatingPlan};
pub use store::{Record, RecordKind, RecordStore};
pub use visitor::{VisitorFilter, VisitorLogic};
