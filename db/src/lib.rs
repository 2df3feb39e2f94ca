pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use util::{config, paths};

/// Opens the configured database.
///
/// `DATABASE_PATH` may be a full DSN or a plain SQLite file path; for a path the
/// parent directory is created first since SQLite will not create it.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    if !path_or_url.contains("://") && !path_or_url.starts_with("sqlite:") {
        paths::ensure_parent_dir(&path_or_url)
            .map_err(|e| DbErr::Custom(format!("Cannot create database directory: {e}")))?;
    }

    let url = paths::database_url(&path_or_url);
    tracing::debug!(%url, "Connecting to database");
    Database::connect(&url).await
}
