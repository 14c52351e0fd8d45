//! Core error types for the newsbrief pipeline.
//!
//! Storage-specific errors (Diesel, SQLite, etc.) are converted into the
//! database-agnostic [`DatabaseError`] by the storage layer.

use thiserror::Error;

use crate::preview::PreviewError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the aggregation pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Preview fetch failed: {0}")]
    Preview(#[from] PreviewError),

    #[error("Template render failed: {0}")]
    Render(String),

    #[error("Snapshot artifact error: {0}")]
    Artifact(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// All details ride as `String` so the storage crate can fold Diesel and
/// pool errors into this format without leaking its types upward.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// A stored document body was not valid JSON.
    #[error("Invalid stored document: {0}")]
    InvalidDocument(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
