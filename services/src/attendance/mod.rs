//! Attendance reconciliation: QR check-in, manual rosters and roster listings.

mod eligibility;
mod engine;
mod error;
mod outcome;

pub use eligibility::EligibilityChecker;
pub use engine::AttendanceEngine;
pub use error::EngineError;
pub use outcome::{BatchResult, BatchSummary, ManualEntry, MemberAttendanceView, RegisterOutcome};
