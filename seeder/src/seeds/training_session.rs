use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::{category, training_session::Model};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct TrainingSessionSeeder;

#[async_trait::async_trait]
impl Seeder for TrainingSessionSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let categories = category::Entity::find().all(db).await?;
        let now = Utc::now();

        for (i, c) in categories.iter().enumerate() {
            // Three sessions this week with generated tokens.
            for day in 0..3 {
                let starts_at = now + Duration::days(day * 2) + Duration::hours(i as i64);
                Model::create(db, c.id, starts_at, None).await?;
            }
        }

        // Fixed token for manual testing against the first category.
        if let Some(first) = categories.first() {
            Model::create(db, first.id, now, Some("DEMO")).await?;
        }
        Ok(())
    }
}
