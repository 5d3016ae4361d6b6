//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use rehearsal_types::{BillingRecord, SubscriptionStatus, UserId};
use sqlx::FromRow;

use crate::error::DbError;

/// Billing record row from the database
#[derive(Debug, Clone, FromRow)]
pub struct BillingRecordRow {
    pub user_id: String,
    pub billing_customer_ref: Option<String>,
    pub billing_subscription_ref: Option<String>,
    pub status: Option<String>,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub trial_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BillingRecordRow> for BillingRecord {
    type Error = DbError;

    fn try_from(row: BillingRecordRow) -> Result<Self, Self::Error> {
        let user_id = UserId::parse(&row.user_id)
            .map_err(|e| DbError::InvalidRow(e.to_string()))?;

        // Unknown or missing provider statuses degrade to inactive
        let status = row
            .status
            .as_deref()
            .map_or(SubscriptionStatus::Inactive, SubscriptionStatus::from_provider);

        Ok(Self {
            user_id,
            billing_customer_ref: row.billing_customer_ref,
            billing_subscription_ref: row.billing_subscription_ref,
            status,
            current_period_start: row.current_period_start,
            current_period_end: row.current_period_end,
            trial_end: row.trial_end,
            cancel_at_period_end: row.cancel_at_period_end,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
