// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use rms_core::error::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Create SQLite connection pool with WAL mode and optimizations
///
/// Opens one connection eagerly, so an unreachable database fails here
/// with `StoreUnavailable` instead of on the first request.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Config(format!("Invalid database URL {}: {}", database_url, e)))?
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
        .map_err(|e| match map_sqlx_error(e) {
            AppError::Database(msg) => AppError::StoreUnavailable(msg),
            other => other,
        })?;

    debug!(database_url = %database_url, "SQLite pool ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        assert!(pool.acquire().await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_path_is_unavailable() {
        let err = create_pool("sqlite:///nonexistent-rms-dir/nested/rms.db")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable(_)), "got {:?}", err);
    }
}
