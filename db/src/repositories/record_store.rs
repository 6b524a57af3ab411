use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};

use crate::models::attendance_record::{
    ActiveModel, Column, Entity, Model as AttendanceRecord, NewRecord, RecordKey,
};

/// Durable storage for attendance records keyed by (member, session).
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn exists(&self, key: RecordKey) -> Result<bool, DbErr>;

    async fn get(&self, key: RecordKey) -> Result<Option<AttendanceRecord>, DbErr>;

    /// Writes `record`, or sets `present` on the existing record for its key.
    ///
    /// An existing record keeps its `origin`.
    async fn put(&self, record: NewRecord) -> Result<(), DbErr>;

    /// Writes `record` only if no record exists for its key.
    ///
    /// Returns `false` when another record already held the key. The check and
    /// the write are a single statement, so concurrent callers for the same key
    /// see exactly one `true`.
    async fn insert_if_absent(&self, record: NewRecord) -> Result<bool, DbErr>;

    /// Removes every record. Returns the number removed.
    async fn delete_all(&self) -> Result<u64, DbErr>;
}

#[derive(Clone)]
pub struct AttendanceRecordRepository {
    db: DatabaseConnection,
}

impl AttendanceRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(record: NewRecord) -> ActiveModel {
    let now = Utc::now();
    ActiveModel {
        member_id: Set(record.key.member_id),
        session_id: Set(record.key.session_id),
        present: Set(record.present),
        origin: Set(record.origin),
        recorded_at: Set(now),
        updated_at: Set(now),
    }
}

fn pair_conflict() -> OnConflict {
    OnConflict::columns([Column::MemberId, Column::SessionId])
}

#[async_trait]
impl RecordStore for AttendanceRecordRepository {
    async fn exists(&self, key: RecordKey) -> Result<bool, DbErr> {
        let count = Entity::find_by_id((key.member_id, key.session_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn get(&self, key: RecordKey) -> Result<Option<AttendanceRecord>, DbErr> {
        Entity::find_by_id((key.member_id, key.session_id))
            .one(&self.db)
            .await
    }

    async fn put(&self, record: NewRecord) -> Result<(), DbErr> {
        Entity::insert(active_model(record))
            .on_conflict(
                pair_conflict()
                    .update_columns([Column::Present, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn insert_if_absent(&self, record: NewRecord) -> Result<bool, DbErr> {
        let rows = Entity::insert(active_model(record))
            .on_conflict(pair_conflict().do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await?;
        Ok(rows > 0)
    }

    async fn delete_all(&self) -> Result<u64, DbErr> {
        let res = Entity::delete_many().exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
