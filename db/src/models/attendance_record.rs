use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Durable attendance fact for one (member, session) pair.
///
/// The composite primary key guarantees at most one record per pair.
/// `origin` is fixed when the record is first written.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub member_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: i64,

    pub present: bool,
    pub origin: Origin,
    pub recorded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How a record came into existence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "snake_case")]
pub enum Origin {
    /// Self-service scan of the session token.
    #[sea_orm(string_value = "qr_check_in")]
    QrCheckIn,

    /// Entered by staff on a roster.
    #[sea_orm(string_value = "manual")]
    Manual,
}

/// Identity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub member_id: i64,
    pub session_id: i64,
}

impl RecordKey {
    pub fn new(member_id: i64, session_id: i64) -> Self {
        Self {
            member_id,
            session_id,
        }
    }
}

/// A record as handed to the store for writing; timestamps are the store's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRecord {
    pub key: RecordKey,
    pub present: bool,
    pub origin: Origin,
}

impl Model {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.member_id, self.session_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training_session::Entity",
        from = "Column::SessionId",
        to = "super::training_session::Column::Id"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
}

impl Related<super::training_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
