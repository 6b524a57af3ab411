use sea_orm::DatabaseConnection;
use services::attendance::AttendanceEngine;

/// Shared handles for every request handler.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    engine: AttendanceEngine,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let engine = AttendanceEngine::from_db(db.clone());
        Self { db, engine }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn engine(&self) -> &AttendanceEngine {
        &self.engine
    }
}
