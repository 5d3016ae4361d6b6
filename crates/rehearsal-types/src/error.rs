//! Common error types

use thiserror::Error;

/// Errors raised while constructing domain types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// User identifiers must be non-empty
    #[error("user id must not be empty")]
    EmptyUserId,
}
