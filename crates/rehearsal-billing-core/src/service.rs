//! Subscription query service

use std::sync::Arc;

use rehearsal_db::BillingRecordRepository;
use rehearsal_types::{AccessDecision, EntitlementCheck, UserId};
use tracing::{debug, error, instrument, warn};

use crate::clock::{Clock, SystemClock};
use crate::derive::{derive, integrity_anomalies};
use crate::gate::AccessGate;
use crate::BillingError;

/// Looks up a user's billing record and derives their access.
///
/// One read per call, no writes, no retries. Safe to call concurrently.
#[derive(Clone)]
pub struct SubscriptionQueryService {
    store: Arc<dyn BillingRecordRepository>,
    clock: Arc<dyn Clock>,
}

impl SubscriptionQueryService {
    /// Create a service reading the wall clock
    pub fn new(store: Arc<dyn BillingRecordRepository>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a service with an explicit time source
    pub fn with_clock(store: Arc<dyn BillingRecordRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Access decision for a user, `None` if they have no billing record
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_subscription_info(
        &self,
        user_id: &UserId,
    ) -> Result<Option<AccessDecision>, BillingError> {
        let record = self.store.find_by_user_id(user_id).await.map_err(|e| {
            error!(error = %e, "Billing record lookup failed");
            BillingError::from(e)
        })?;

        let Some(record) = record else {
            debug!("No billing record");
            return Ok(None);
        };

        let now = self.clock.now();
        for anomaly in integrity_anomalies(&record, now) {
            warn!(status = %record.status, anomaly = %anomaly, "Billing record integrity anomaly");
        }

        let decision = derive(&record, now);
        debug!(
            status = %decision.status,
            is_active = decision.is_active,
            "Access derived"
        );

        Ok(Some(decision))
    }

    /// Premium entitlement check for a user
    pub async fn check_access(&self, user_id: &UserId) -> Result<EntitlementCheck, BillingError> {
        let decision = self.get_subscription_info(user_id).await?;
        Ok(AccessGate::check(decision.as_ref()))
    }

    /// Readiness probe against the billing record store
    pub async fn check_store(&self) -> Result<(), BillingError> {
        self.store.ping().await?;
        Ok(())
    }
}

impl std::fmt::Debug for SubscriptionQueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionQueryService")
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
