//! PostgreSQL repository implementations

mod billing_record;

pub use billing_record::PgBillingRecordRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub billing_records: PgBillingRecordRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            billing_records: PgBillingRecordRepository::new(pool),
        }
    }
}
