//! Application error types with proper error chaining.

use thiserror::Error;

/// Infrastructure-level store failures.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Query execution failed: {0}")]
    Query(String),
    #[error("Duplicate record: {0}")]
    Duplicate(String),
    #[error("Pool exhausted: {0}")]
    PoolExhausted(String),
    #[error("Migration failed: {0}")]
    Migration(String),
}

/// Business-rule errors surfaced to the API boundary.
///
/// The message strings carried by `Validation`, `Conflict`, `Unauthorized`
/// and `NotFound` are part of the wire contract; they are returned verbatim
/// as plain-text response bodies.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted("Pool timed out".to_string()),
            sqlx::Error::Database(db_err) => {
                // 23505 is the Postgres unique-violation SQLSTATE; it is the
                // storage-layer backstop for the registration race.
                if db_err.code().is_some_and(|code| code == "23505") {
                    return StoreError::Duplicate(db_err.message().to_string());
                }
                StoreError::Query(db_err.message().to_string())
            }
            _ => StoreError::Query(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(StoreError::from(err))
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Store(StoreError::Migration(err.to_string()))
    }
}
