use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::models::training_session::{Column, Entity, Model as TrainingSession};

/// Resolves sessions by check-in token or by id.
#[async_trait]
pub trait SessionLookup: Send + Sync {
    /// Maps a check-in token to the session it currently identifies.
    ///
    /// Blank tokens never resolve.
    async fn resolve(&self, token: &str) -> Result<Option<TrainingSession>, DbErr>;

    async fn find(&self, session_id: i64) -> Result<Option<TrainingSession>, DbErr>;
}

#[derive(Clone)]
pub struct TrainingSessionRepository {
    db: DatabaseConnection,
}

impl TrainingSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionLookup for TrainingSessionRepository {
    async fn resolve(&self, token: &str) -> Result<Option<TrainingSession>, DbErr> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(None);
        }

        // A reused token belongs to the most recently scheduled session.
        Entity::find()
            .filter(Column::CheckInToken.eq(token))
            .order_by_desc(Column::StartsAt)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
    }

    async fn find(&self, session_id: i64) -> Result<Option<TrainingSession>, DbErr> {
        Entity::find_by_id(session_id).one(&self.db).await
    }
}
