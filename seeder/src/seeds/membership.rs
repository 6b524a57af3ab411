use crate::seed::Seeder;
use db::models::{category, member, member_category};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct MembershipSeeder;

#[async_trait::async_trait]
impl Seeder for MembershipSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let members = member::Entity::find().all(db).await?;
        let categories = category::Entity::find().all(db).await?;
        if categories.is_empty() {
            return Ok(());
        }

        for m in &members {
            if m.is_staff() {
                // Staff coach every category.
                for c in &categories {
                    member_category::Model::enroll(db, m.id, c.id).await?;
                }
                continue;
            }

            // One or two distinct categories per athlete.
            let first = fastrand::usize(..categories.len());
            member_category::Model::enroll(db, m.id, categories[first].id).await?;
            if categories.len() > 1 && fastrand::bool() {
                let second = (first + 1 + fastrand::usize(..categories.len() - 1)) % categories.len();
                member_category::Model::enroll(db, m.id, categories[second].id).await?;
            }
        }
        Ok(())
    }
}
