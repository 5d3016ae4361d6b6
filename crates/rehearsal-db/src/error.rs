//! Database errors

use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Row could not be mapped to a domain type
    #[error("invalid row: {0}")]
    InvalidRow(String),

    /// Storage backend cannot be reached
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for repository operations
pub type DbResult<T> = Result<T, DbError>;
