// RMS Infrastructure - SQLite Adapter
// Implements: RecordStore

mod connection;
mod error;
mod migration;
mod record_store;
mod sql;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use record_store::SqliteRecordStore;

// Note: sqlx::Error conversion is handled by `error::map_sqlx_error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
