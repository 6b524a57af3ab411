use std::sync::Arc;

use db::models::attendance_record::{NewRecord, Origin, RecordKey};
use db::models::training_session::Model as TrainingSession;
use db::repositories::{
    AttendanceRecordRepository, MemberDirectory, MemberRepository, RecordStore, SessionLookup,
    TrainingSessionRepository,
};
use futures::future::try_join_all;
use sea_orm::DatabaseConnection;

use super::eligibility::EligibilityChecker;
use super::error::EngineError;
use super::outcome::{BatchResult, BatchSummary, ManualEntry, MemberAttendanceView, RegisterOutcome};

/// What happened to a single manual entry.
enum EntryEffect {
    Applied,
    SkippedToken,
    SkippedMember,
}

/// Decides the durable attendance record for every (member, session) pair.
///
/// The engine keeps no record state of its own; every call reads the store.
#[derive(Clone)]
pub struct AttendanceEngine {
    sessions: Arc<dyn SessionLookup>,
    members: Arc<dyn MemberDirectory>,
    records: Arc<dyn RecordStore>,
    eligibility: EligibilityChecker,
}

impl AttendanceEngine {
    pub fn new(
        sessions: Arc<dyn SessionLookup>,
        members: Arc<dyn MemberDirectory>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        let eligibility = EligibilityChecker::new(members.clone());
        Self {
            sessions,
            members,
            records,
            eligibility,
        }
    }

    /// Wires the engine to the sea-orm repositories over `db`.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(TrainingSessionRepository::new(db.clone())),
            Arc::new(MemberRepository::new(db.clone())),
            Arc::new(AttendanceRecordRepository::new(db)),
        )
    }

    pub fn records(&self) -> Arc<dyn RecordStore> {
        self.records.clone()
    }

    /// Self-service check-in with a scanned session token.
    ///
    /// Writes at most one record. A pair that already has a record, whatever
    /// its origin, is left untouched and reported as `AlreadyRegistered`.
    pub async fn register_by_token(
        &self,
        token: &str,
        member_id: i64,
    ) -> Result<RegisterOutcome, EngineError> {
        let result = self.try_register(token, member_id).await;
        match &result {
            Ok(outcome) => {
                tracing::info!(member_id, outcome = ?outcome, "QR check-in processed");
            }
            Err(e) => {
                tracing::error!(member_id, error = %e, "QR check-in failed");
            }
        }
        result
    }

    async fn try_register(
        &self,
        token: &str,
        member_id: i64,
    ) -> Result<RegisterOutcome, EngineError> {
        let Some(session) = self.sessions.resolve(token).await? else {
            return Ok(RegisterOutcome::InvalidToken);
        };

        let Some(member) = self.members.get(member_id).await? else {
            return Ok(RegisterOutcome::UnknownMember);
        };

        if !self
            .eligibility
            .is_eligible(member.id, session.category_id)
            .await?
        {
            return Ok(RegisterOutcome::NotEligible);
        }

        let key = RecordKey::new(member.id, session.id);
        if self.records.exists(key).await? {
            return Ok(RegisterOutcome::AlreadyRegistered);
        }

        // The existence check above is advisory; the store arbitrates races.
        let inserted = self
            .records
            .insert_if_absent(NewRecord {
                key,
                present: true,
                origin: Origin::QrCheckIn,
            })
            .await?;

        if inserted {
            Ok(RegisterOutcome::Registered)
        } else {
            Ok(RegisterOutcome::AlreadyRegistered)
        }
    }

    /// Applies a staff-entered roster.
    ///
    /// Entries are independent: unresolvable tokens and unknown members are
    /// skipped and counted. Staff input always wins on `present`, while an
    /// existing record keeps its origin. Eligibility is not checked.
    ///
    /// A storage failure stops the batch with `Failure`; entries already
    /// written are not rolled back.
    pub async fn apply_manual_batch(&self, entries: &[ManualEntry]) -> BatchResult {
        let mut summary = BatchSummary::default();

        for entry in entries {
            match self.apply_manual_entry(entry).await {
                Ok(EntryEffect::Applied) => summary.applied += 1,
                Ok(EntryEffect::SkippedToken) => summary.skipped_invalid_token += 1,
                Ok(EntryEffect::SkippedMember) => summary.skipped_unknown_member += 1,
                Err(e) => {
                    tracing::error!(
                        member_id = entry.member_id,
                        applied = summary.applied,
                        error = %e,
                        "Manual attendance batch aborted"
                    );
                    return BatchResult::Failure(e.to_string());
                }
            }
        }

        tracing::info!(
            applied = summary.applied,
            skipped = summary.skipped(),
            "Manual attendance batch applied"
        );
        BatchResult::Success(summary)
    }

    async fn apply_manual_entry(&self, entry: &ManualEntry) -> Result<EntryEffect, EngineError> {
        if entry.token.trim().is_empty() {
            tracing::debug!(member_id = entry.member_id, "skipping entry with blank token");
            return Ok(EntryEffect::SkippedToken);
        }

        let Some(session) = self.sessions.resolve(&entry.token).await? else {
            tracing::debug!(member_id = entry.member_id, "skipping entry with unknown token");
            return Ok(EntryEffect::SkippedToken);
        };

        let Some(member) = self.members.get(entry.member_id).await? else {
            tracing::debug!(member_id = entry.member_id, "skipping entry for unknown member");
            return Ok(EntryEffect::SkippedMember);
        };

        let key = RecordKey::new(member.id, session.id);
        let origin = match self.records.get(key).await? {
            Some(existing) => {
                tracing::debug!(
                    member_id = key.member_id,
                    session_id = key.session_id,
                    origin = %existing.origin,
                    present = entry.present,
                    "correcting existing record"
                );
                existing.origin
            }
            None => Origin::Manual,
        };

        self.records
            .put(NewRecord {
                key,
                present: entry.present,
                origin,
            })
            .await?;

        Ok(EntryEffect::Applied)
    }

    /// Roster of a session: every eligible member, in enrollment order, with
    /// their attendance. Unknown sessions give an empty roster.
    pub async fn list_for_session(
        &self,
        session_id: i64,
    ) -> Result<Vec<MemberAttendanceView>, EngineError> {
        match self.sessions.find(session_id).await? {
            Some(session) => self.roster(&session).await,
            None => Ok(Vec::new()),
        }
    }

    /// Same as [`list_for_session`](Self::list_for_session), addressed by check-in token.
    pub async fn list_for_token(
        &self,
        token: &str,
    ) -> Result<Vec<MemberAttendanceView>, EngineError> {
        match self.sessions.resolve(token).await? {
            Some(session) => self.roster(&session).await,
            None => Ok(Vec::new()),
        }
    }

    async fn roster(
        &self,
        session: &TrainingSession,
    ) -> Result<Vec<MemberAttendanceView>, EngineError> {
        let members = self.eligibility.eligible_roster(session.category_id).await?;

        let views = members.iter().map(|member| async move {
            let record = self
                .records
                .get(RecordKey::new(member.id, session.id))
                .await?;
            Ok::<_, EngineError>(MemberAttendanceView::new(member, record.as_ref()))
        });

        try_join_all(views).await
    }
}
