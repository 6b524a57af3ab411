use crate::seed::Seeder;
use db::models::member::{MemberRole, Model};
use fake::{Fake, faker::name::en::Name};
use sea_orm::{DatabaseConnection, DbErr};

pub struct MemberSeeder;

#[async_trait::async_trait]
impl Seeder for MemberSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Fixed staff member
        Model::create(db, "Head Coach", MemberRole::Staff).await?;

        // Random athletes
        for _ in 0..20 {
            let name: String = Name().fake();
            Model::create(db, &name, MemberRole::Standard).await?;
        }
        Ok(())
    }
}
