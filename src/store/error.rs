//! Store Error Types

use thiserror::Error;

/// Errors from the relational store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite error
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Row violates a domain constraint (length limits, duplicates)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// IO error (database file handling)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
