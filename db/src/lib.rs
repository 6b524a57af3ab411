pub mod models;
pub mod repositories;
pub mod test_utils;

pub use sea_orm::DbErr;

use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use util::config;

/// Opens the configured database.
///
/// `DATABASE_PATH` may be a full DSN or a plain SQLite file path; file paths
/// get their parent directory created and are opened in read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    tracing::debug!(target: "db", url = %url, "connecting to database");
    Database::connect(&url).await
}
