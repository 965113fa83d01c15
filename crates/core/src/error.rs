// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// `NotFound`, `CreationFailed` and `StoreUnavailable` are the classified
/// causes a CRUD call can fail with. The remaining variants cover malformed
/// input and adapter failures that do not fit those three.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Creation failed: {0}")]
    CreationFailed(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by classifying into Conflict / StoreUnavailable / Database
