use crate::seed::Seeder;
use db::models::category::Model;
use sea_orm::{DatabaseConnection, DbErr};

pub struct CategorySeeder;

const CATEGORIES: [&str; 4] = ["Swim", "Run", "Cycle", "Strength"];

#[async_trait::async_trait]
impl Seeder for CategorySeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for name in CATEGORIES {
            Model::create(db, name).await?;
        }
        Ok(())
    }
}
