use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Fixture helpers for tests that need stable ids.
pub mod fixtures {
    use crate::models::{
        category,
        member::{self, MemberRole},
        member_category, training_session,
    };
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

    pub async fn category(db: &DatabaseConnection, id: i64, name: &str) -> category::Model {
        category::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
        }
        .insert(db)
        .await
        .expect("insert category")
    }

    pub async fn member(
        db: &DatabaseConnection,
        id: i64,
        name: &str,
        role: MemberRole,
    ) -> member::Model {
        member::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            role: Set(role),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .expect("insert member")
    }

    pub async fn enroll(db: &DatabaseConnection, member_id: i64, category_id: i64) {
        member_category::Model::enroll(db, member_id, category_id)
            .await
            .expect("enroll member");
    }

    pub async fn session(
        db: &DatabaseConnection,
        id: i64,
        category_id: i64,
        token: &str,
    ) -> training_session::Model {
        let now = Utc::now();
        training_session::ActiveModel {
            id: Set(id),
            category_id: Set(category_id),
            starts_at: Set(now),
            check_in_token: Set(token.to_owned()),
            created_at: Set(now),
        }
        .insert(db)
        .await
        .expect("insert session")
    }
}
