pub mod attendance;
pub mod category;
pub mod participant;
pub mod status;
pub mod visitor;

pub use attendance::{AttendanceDraft, AttendanceEntry};
pub use category::Category;
pub use participant::Participant;
pub use status::Status;
pub use visitor::{VisitorEntry, VisitorForm};
