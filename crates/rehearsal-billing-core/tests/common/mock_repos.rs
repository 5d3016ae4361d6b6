//! Mock repositories for testing

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rehearsal_db::{BillingRecordRepository, DbError, DbResult};
use rehearsal_types::{BillingRecord, SubscriptionStatus, UserId};

/// In-memory billing record repository for testing
#[derive(Default, Clone)]
pub struct MockBillingRecordRepository {
    records: Arc<DashMap<UserId, BillingRecord>>,
    unavailable: Arc<AtomicBool>,
    lookups: Arc<AtomicUsize>,
}

impl MockBillingRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a test record directly
    pub fn insert_record(&self, record: BillingRecord) {
        self.records.insert(record.user_id.clone(), record);
    }

    /// Make every subsequent call fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of lookups served so far
    #[allow(dead_code)]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> DbResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable(
                "connection refused (os error 111)".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl BillingRecordRepository for MockBillingRecordRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> DbResult<Option<BillingRecord>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.records.get(user_id).map(|r| r.value().clone()))
    }

    async fn ping(&self) -> DbResult<()> {
        self.check_available()
    }
}

/// Build a billing record with a subscription and a period around `now`
#[allow(dead_code)]
pub fn billing_record(user_id: &str, status: SubscriptionStatus, now: DateTime<Utc>) -> BillingRecord {
    let mut record = BillingRecord::new(
        UserId::parse(user_id).expect("valid test user id"),
        status,
        now - Duration::days(30),
    );
    record.billing_customer_ref = Some(format!("cus_{user_id}"));
    record.billing_subscription_ref = Some(format!("sub_{user_id}"));
    record.current_period_start = Some(now - Duration::days(5));
    record.current_period_end = Some(now + Duration::days(25));
    record.updated_at = now - Duration::days(1);
    record
}
