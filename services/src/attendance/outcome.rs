use db::models::{
    attendance_record::{Model as AttendanceRecord, Origin},
    member::Model as Member,
};
use serde::{Deserialize, Serialize};

/// Result of a self-service QR check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterOutcome {
    /// A new record was created.
    Registered,
    /// A record for the pair already existed; nothing was written.
    AlreadyRegistered,
    /// The token does not identify any session.
    InvalidToken,
    UnknownMember,
    /// The member is not enrolled in the session's category.
    NotEligible,
}

impl RegisterOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RegisterOutcome::Registered => "Attendance registered",
            RegisterOutcome::AlreadyRegistered => "Attendance already registered",
            RegisterOutcome::InvalidToken => "Invalid check-in token",
            RegisterOutcome::UnknownMember => "Member not found",
            RegisterOutcome::NotEligible => "Member is not enrolled in this session's category",
        }
    }
}

/// One line of a staff-entered roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManualEntry {
    pub member_id: i64,
    #[serde(alias = "session_token")]
    pub token: String,
    pub present: bool,
}

/// Counts gathered while applying a manual batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub applied: usize,
    pub skipped_invalid_token: usize,
    pub skipped_unknown_member: usize,
}

impl BatchSummary {
    pub fn skipped(&self) -> usize {
        self.skipped_invalid_token + self.skipped_unknown_member
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchResult {
    Success(BatchSummary),
    /// A storage failure stopped the batch. Entries written before it remain.
    Failure(String),
}

impl BatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchResult::Success(_))
    }
}

/// A member's line on a session roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberAttendanceView {
    pub member_id: i64,
    pub name: String,
    pub present: bool,
    pub origin_is_qr: bool,
}

impl MemberAttendanceView {
    /// Builds the roster line for `member` from its record, if any.
    ///
    /// Only a record marked present shows up; absent or missing records both
    /// read as not present.
    pub fn new(member: &Member, record: Option<&AttendanceRecord>) -> Self {
        let (present, origin_is_qr) = match record {
            Some(r) if r.present => (true, r.origin == Origin::QrCheckIn),
            _ => (false, false),
        };

        Self {
            member_id: member.id,
            name: member.name.clone(),
            present,
            origin_is_qr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use db::models::member::MemberRole;

    fn member() -> Member {
        Member {
            id: 7,
            name: "Ana".into(),
            role: MemberRole::Standard,
            created_at: Utc::now(),
        }
    }

    fn record(present: bool, origin: Origin) -> AttendanceRecord {
        AttendanceRecord {
            member_id: 7,
            session_id: 42,
            present,
            origin,
            recorded_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn view_defaults_when_no_record() {
        let v = MemberAttendanceView::new(&member(), None);
        assert_eq!(v.member_id, 7);
        assert_eq!(v.name, "Ana");
        assert!(!v.present);
        assert!(!v.origin_is_qr);
    }

    #[test]
    fn view_takes_origin_only_from_present_records() {
        let qr = MemberAttendanceView::new(&member(), Some(&record(true, Origin::QrCheckIn)));
        assert!(qr.present && qr.origin_is_qr);

        let manual = MemberAttendanceView::new(&member(), Some(&record(true, Origin::Manual)));
        assert!(manual.present && !manual.origin_is_qr);

        let absent_qr = MemberAttendanceView::new(&member(), Some(&record(false, Origin::QrCheckIn)));
        assert!(!absent_qr.present && !absent_qr.origin_is_qr);
    }

    #[test]
    fn manual_entry_accepts_session_token_alias() {
        let e: ManualEntry =
            serde_json::from_str(r#"{"member_id":7,"session_token":"ABC","present":true}"#)
                .unwrap();
        assert_eq!(e.token, "ABC");
    }
}
