//! Weekly wipe of all attendance records.
//!
//! Attendance is short-lived data: every record is dropped on a fixed weekly
//! boundary. The purge is unconditional and fire-and-forget; a failed run is
//! logged and the next scheduled run proceeds as usual.
//!
//! ```text
//! PurgeScheduler::start()
//!     └─► cron job (default: Sunday 23:59 UTC)
//!             └─► RecordStore::delete_all()
//! ```

use std::sync::Arc;

use db::repositories::RecordStore;
use thiserror::Error;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use util::config;

#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("purge scheduler error: {0}")]
    Scheduler(#[from] JobSchedulerError),
}

/// Owns the cron job that purges the record store.
pub struct PurgeScheduler {
    records: Arc<dyn RecordStore>,
    schedule: String,
    scheduler: Option<JobScheduler>,
}

impl PurgeScheduler {
    /// `schedule` is a six-field cron expression (seconds first), evaluated in UTC.
    pub fn new(records: Arc<dyn RecordStore>, schedule: impl Into<String>) -> Self {
        Self {
            records,
            schedule: schedule.into(),
            scheduler: None,
        }
    }

    /// Uses the `PURGE_CRON` schedule from the application config.
    pub fn from_config(records: Arc<dyn RecordStore>) -> Self {
        Self::new(records, config::purge_cron())
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_some()
    }

    /// Registers the purge job and starts the scheduler. Calling it again while
    /// running is a no-op.
    pub async fn start(&mut self) -> Result<(), PurgeError> {
        if self.scheduler.is_some() {
            return Ok(());
        }

        let scheduler = JobScheduler::new().await?;

        let records = self.records.clone();
        let job = Job::new_async(self.schedule.as_str(), move |_uuid, _lock| {
            let records = records.clone();
            Box::pin(async move {
                purge_records(records.as_ref()).await;
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;

        tracing::info!(schedule = %self.schedule, "Attendance purge scheduled");
        self.scheduler = Some(scheduler);
        Ok(())
    }

    /// Stops the scheduler. Safe to call when not running.
    pub async fn shutdown(&mut self) -> Result<(), PurgeError> {
        if let Some(mut scheduler) = self.scheduler.take() {
            scheduler.shutdown().await?;
            tracing::info!("Attendance purge scheduler stopped");
        }
        Ok(())
    }

    /// Runs one purge immediately. Returns the number of records removed, or
    /// `None` if the store failed (the failure is logged).
    pub async fn purge_now(&self) -> Option<u64> {
        purge_records(self.records.as_ref()).await
    }
}

async fn purge_records(records: &dyn RecordStore) -> Option<u64> {
    match records.delete_all().await {
        Ok(removed) => {
            tracing::info!(removed, "Weekly attendance purge complete");
            Some(removed)
        }
        Err(e) => {
            tracing::error!(error = %e, "Weekly attendance purge failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use db::models::attendance_record::{Model as AttendanceRecord, NewRecord, Origin, RecordKey};
    use db::models::member::MemberRole;
    use db::repositories::AttendanceRecordRepository;
    use db::test_utils::{fixtures, setup_test_db};
    use sea_orm::DbErr;
    use std::time::Duration;

    struct BrokenStore;

    #[async_trait]
    impl RecordStore for BrokenStore {
        async fn exists(&self, _key: RecordKey) -> Result<bool, DbErr> {
            Err(DbErr::Custom("offline".into()))
        }
        async fn get(&self, _key: RecordKey) -> Result<Option<AttendanceRecord>, DbErr> {
            Err(DbErr::Custom("offline".into()))
        }
        async fn put(&self, _record: NewRecord) -> Result<(), DbErr> {
            Err(DbErr::Custom("offline".into()))
        }
        async fn insert_if_absent(&self, _record: NewRecord) -> Result<bool, DbErr> {
            Err(DbErr::Custom("offline".into()))
        }
        async fn delete_all(&self) -> Result<u64, DbErr> {
            Err(DbErr::Custom("offline".into()))
        }
    }

    async fn seeded_store() -> Arc<AttendanceRecordRepository> {
        let db = setup_test_db().await;
        fixtures::category(&db, 1, "Swim").await;
        fixtures::member(&db, 7, "Ana", MemberRole::Standard).await;
        fixtures::member(&db, 9, "Bea", MemberRole::Standard).await;
        fixtures::session(&db, 42, 1, "ABC").await;

        let store = Arc::new(AttendanceRecordRepository::new(db));
        for member_id in [7, 9] {
            store
                .put(NewRecord {
                    key: RecordKey::new(member_id, 42),
                    present: true,
                    origin: Origin::Manual,
                })
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn purge_now_removes_every_record() {
        let store = seeded_store().await;
        let purge = PurgeScheduler::new(store.clone(), config::DEFAULT_PURGE_CRON);

        assert_eq!(purge.purge_now().await, Some(2));
        assert!(store.get(RecordKey::new(7, 42)).await.unwrap().is_none());
        assert!(store.get(RecordKey::new(9, 42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failed_purge_is_swallowed() {
        let purge = PurgeScheduler::new(Arc::new(BrokenStore), config::DEFAULT_PURGE_CRON);
        assert_eq!(purge.purge_now().await, None);
        // Still usable afterwards.
        assert_eq!(purge.purge_now().await, None);
    }

    #[tokio::test]
    async fn invalid_schedule_is_rejected_on_start() {
        let mut purge = PurgeScheduler::new(Arc::new(BrokenStore), "not a cron line");
        assert!(purge.start().await.is_err());
        assert!(!purge.is_running());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn scheduled_job_fires_and_shuts_down() {
        let store = seeded_store().await;
        let mut purge = PurgeScheduler::new(store.clone(), "* * * * * *");

        purge.start().await.unwrap();
        assert!(purge.is_running());
        // Starting twice keeps the single job.
        purge.start().await.unwrap();

        let mut purged = false;
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if !store.exists(RecordKey::new(7, 42)).await.unwrap() {
                purged = true;
                break;
            }
        }
        assert!(purged, "purge job did not fire within 5s");

        purge.shutdown().await.unwrap();
        assert!(!purge.is_running());
        purge.shutdown().await.unwrap();
    }
}
