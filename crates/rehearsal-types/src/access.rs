//! Access decision and entitlement types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SubscriptionStatus;

/// Derived view of a billing record that gates premium features.
///
/// Recomputed on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    /// Echo of the stored status
    pub status: SubscriptionStatus,
    /// User currently has usable access
    pub is_active: bool,
    /// User has the paid tier
    pub is_premium: bool,
    /// Trial end, only while trialing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// End of the current billing period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<DateTime<Utc>>,
    /// Whole days left in an unexpired trial, rounded up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_left_in_trial: Option<u32>,
    /// Subscription lapses at period end
    pub cancel_at_period_end: bool,
}

impl AccessDecision {
    /// Decision for a user with no billing record
    pub const fn inactive() -> Self {
        Self {
            status: SubscriptionStatus::Inactive,
            is_active: false,
            is_premium: false,
            trial_ends_at: None,
            current_period_end: None,
            days_left_in_trial: None,
            cancel_at_period_end: false,
        }
    }

    /// Stored status says trialing but the trial end has passed
    pub fn is_expired_trial(&self) -> bool {
        self.status == SubscriptionStatus::Trialing && !self.is_active
    }
}

/// Entitlement check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementCheck {
    /// Whether access is allowed
    pub allowed: bool,
    /// Reason if denied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EntitlementCheck {
    /// Access granted
    pub const fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// Access denied with a reason
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}
