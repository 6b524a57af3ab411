use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::models::{
    member::{self, Model as Member},
    member_category,
};

/// Read-only view of club membership.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    async fn get(&self, member_id: i64) -> Result<Option<Member>, DbErr>;

    /// Category ids the member is enrolled in.
    async fn categories_of(&self, member_id: i64) -> Result<Vec<i64>, DbErr>;

    /// Members enrolled in a category, in enrollment order.
    async fn members_in_category(&self, category_id: i64) -> Result<Vec<Member>, DbErr>;
}

#[derive(Clone)]
pub struct MemberRepository {
    db: DatabaseConnection,
}

impl MemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberDirectory for MemberRepository {
    async fn get(&self, member_id: i64) -> Result<Option<Member>, DbErr> {
        member::Entity::find_by_id(member_id).one(&self.db).await
    }

    async fn categories_of(&self, member_id: i64) -> Result<Vec<i64>, DbErr> {
        let rows = member_category::Entity::find()
            .filter(member_category::Column::MemberId.eq(member_id))
            .order_by_asc(member_category::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|r| r.category_id).collect())
    }

    async fn members_in_category(&self, category_id: i64) -> Result<Vec<Member>, DbErr> {
        member::Entity::find()
            .join(JoinType::InnerJoin, member::Relation::Memberships.def())
            .filter(member_category::Column::CategoryId.eq(category_id))
            .order_by_asc(member_category::Column::Id)
            .all(&self.db)
            .await
    }
}
