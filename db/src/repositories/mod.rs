//! Keyed stores the attendance core reads and writes through.
//!
//! Each module pairs a trait (the seam the services crate depends on) with
//! its sea-orm implementation over the shared `DatabaseConnection`.

pub mod member_directory;
pub mod record_store;
pub mod session_lookup;

pub use member_directory::{MemberDirectory, MemberRepository};
pub use record_store::{AttendanceRecordRepository, RecordStore};
pub use session_lookup::{SessionLookup, TrainingSessionRepository};
