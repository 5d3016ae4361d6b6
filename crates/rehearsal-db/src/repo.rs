//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;
use rehearsal_types::{BillingRecord, UserId};

use crate::error::DbResult;

/// Billing record repository trait
///
/// One record per user. Lookups distinguish "no record" (`Ok(None)`)
/// from a failed lookup (`Err`).
#[async_trait]
pub trait BillingRecordRepository: Send + Sync {
    /// Find the billing record for a user
    async fn find_by_user_id(&self, user_id: &UserId) -> DbResult<Option<BillingRecord>>;

    /// Check that the store is reachable
    async fn ping(&self) -> DbResult<()>;
}
