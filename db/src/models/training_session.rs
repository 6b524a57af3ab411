use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

/// A scheduled training occurrence.
///
/// `check_in_token` is the opaque secret encoded in the session's QR code.
/// It identifies this session while it is current; older sessions may carry
/// a token that has since been reused.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "training_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: i64,
    pub starts_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub check_in_token: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    Records,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Records.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Schedules a session. A random 128-bit hex token is issued when none is given.
    pub async fn create(
        db: &DatabaseConnection,
        category_id: i64,
        starts_at: DateTime<Utc>,
        check_in_token: Option<&str>,
    ) -> Result<Model, DbErr> {
        let token = match check_in_token {
            Some(t) => t.to_owned(),
            None => generate_token(),
        };

        ActiveModel {
            category_id: Set(category_id),
            starts_at: Set(starts_at),
            check_in_token: Set(token),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}

pub fn generate_token() -> String {
    use rand::RngCore;
    let mut buf = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_hex_and_distinct() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
