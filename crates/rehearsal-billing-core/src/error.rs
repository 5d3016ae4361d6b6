//! Billing errors

use thiserror::Error;

/// Billing errors
///
/// A missing billing record is not an error; lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum BillingError {
    /// Billing record store failed or could not be reached
    #[error("billing store unavailable")]
    StoreUnavailable(#[from] rehearsal_db::DbError),
}

impl BillingError {
    /// Safe to retry at the caller with backoff
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
