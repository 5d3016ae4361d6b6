//! Subscription types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::UserId;

/// Subscription status as reported by the billing provider
///
/// The provider sends free-form strings. Anything unrecognized lands on
/// [`SubscriptionStatus::Inactive`] so a new provider status never grants access.
/// Deserialization goes through [`SubscriptionStatus::from_provider`] and never fails
/// on a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// In trial period
    Trialing,
    /// Subscription is active and paid
    Active,
    /// Payment is past due; provider is retrying
    PastDue,
    /// Subscription was canceled
    Canceled,
    /// Provider gave up collecting payment
    Unpaid,
    /// No subscription, or a status we do not recognize
    #[default]
    Inactive,
}

impl SubscriptionStatus {
    /// Every status, in lifecycle order
    pub const ALL: [Self; 6] = [
        Self::Trialing,
        Self::Active,
        Self::PastDue,
        Self::Canceled,
        Self::Unpaid,
        Self::Inactive,
    ];

    /// Wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trialing => "trialing",
            Self::Active => "active",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
            Self::Unpaid => "unpaid",
            Self::Inactive => "inactive",
        }
    }

    /// Parse a provider status string. Never fails.
    pub fn from_provider(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "trialing" => Self::Trialing,
            "active" => Self::Active,
            "past_due" => Self::PastDue,
            "canceled" | "cancelled" => Self::Canceled,
            "unpaid" => Self::Unpaid,
            _ => Self::Inactive,
        }
    }

    /// Whether the stored status alone grants access.
    ///
    /// `PastDue` keeps access while the provider retries payment. Trials are
    /// further bounded by their end time, which this method does not see.
    pub const fn grants_access(&self) -> bool {
        matches!(self, Self::Trialing | Self::Active | Self::PastDue)
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SubscriptionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_provider(&raw))
    }
}

/// Stored subscription state for one user, synchronized from the billing provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRecord {
    /// Owner of the record
    pub user_id: UserId,
    /// Billing provider customer reference
    pub billing_customer_ref: Option<String>,
    /// Billing provider subscription reference (absent until a subscription exists)
    pub billing_subscription_ref: Option<String>,
    /// Subscription status
    pub status: SubscriptionStatus,
    /// Current billing period start
    pub current_period_start: Option<DateTime<Utc>>,
    /// Current billing period end
    pub current_period_end: Option<DateTime<Utc>>,
    /// Trial end; only meaningful while trialing
    pub trial_end: Option<DateTime<Utc>>,
    /// Subscription lapses at period end
    pub cancel_at_period_end: bool,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last written
    pub updated_at: DateTime<Utc>,
}

impl BillingRecord {
    /// Create a record with only the required fields set
    pub fn new(user_id: UserId, status: SubscriptionStatus, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            billing_customer_ref: None,
            billing_subscription_ref: None,
            status,
            current_period_start: None,
            current_period_end: None,
            trial_end: None,
            cancel_at_period_end: false,
            created_at,
            updated_at: created_at,
        }
    }

    /// Trial end, honored only while the record is trialing
    pub fn effective_trial_end(&self) -> Option<DateTime<Utc>> {
        match self.status {
            SubscriptionStatus::Trialing => self.trial_end,
            _ => None,
        }
    }
}
