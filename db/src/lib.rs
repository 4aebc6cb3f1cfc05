pub mod models;
pub mod test_utils;

use common::config;
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;

/// Opens the database named by `DATABASE_PATH`.
///
/// A value starting with `sqlite:` is used as a DSN as-is; anything else is treated as a
/// SQLite file path that is created on first use.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    connect_to(&config::database_path()).await
}

pub async fn connect_to(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url.to_string()
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(path_or_url).parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(
                    dir = %parent.display(),
                    error = %err,
                    "could not create database directory"
                );
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    tracing::debug!(url = %url, "connecting to database");
    Database::connect(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/dev.db");

        let db = connect_to(path.to_str().unwrap()).await;

        assert!(db.is_ok());
        assert!(path.parent().unwrap().is_dir());
    }

    #[tokio::test]
    async fn unusable_parent_surfaces_connect_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let path = blocker.join("dev.db");

        assert!(connect_to(path.to_str().unwrap()).await.is_err());
    }

    #[tokio::test]
    async fn dsn_is_used_as_is() {
        assert!(connect_to("sqlite::memory:").await.is_ok());
    }
}
