//! Access derivation
//!
//! Pure functions over `(record, now)`. No I/O, no clock reads, safe to call
//! from any thread.
//!
//! | status     | active | premium |
//! |------------|--------|---------|
//! | trialing   | while `trial_end > now` | same |
//! | active     | yes    | yes     |
//! | past_due   | yes    | yes     |
//! | canceled   | no     | no      |
//! | unpaid     | no     | no      |
//! | inactive   | no     | no      |
//!
//! A trial whose end has passed is denied even if the stored status still
//! says `trialing`. Webhooks can arrive late, and this is the one place the
//! stored status is overridden instead of echoed.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rehearsal_types::{AccessDecision, BillingRecord, SubscriptionStatus};

/// Derive the access decision for a billing record at `now`.
///
/// Total: every record yields a complete decision.
pub fn derive(record: &BillingRecord, now: DateTime<Utc>) -> AccessDecision {
    let trial_end = record.effective_trial_end();
    let days_left = trial_end.and_then(|end| days_until(end, now));

    let is_active = match (record.status, trial_end) {
        (SubscriptionStatus::Trialing, Some(_)) => days_left.is_some(),
        (status, _) => status.grants_access(),
    };

    // Trial fields only describe a trial that is still running
    let live_trial = record.status == SubscriptionStatus::Trialing && is_active;

    AccessDecision {
        status: record.status,
        is_active,
        // Single paid tier: every usable subscription is premium
        is_premium: is_active,
        trial_ends_at: trial_end.filter(|_| live_trial),
        current_period_end: record.current_period_end,
        days_left_in_trial: days_left.filter(|_| live_trial),
        cancel_at_period_end: record.cancel_at_period_end,
    }
}

/// Derive for a possibly-missing record
pub fn derive_optional(record: Option<&BillingRecord>, now: DateTime<Utc>) -> AccessDecision {
    record.map_or_else(AccessDecision::inactive, |r| derive(r, now))
}

/// Whole days from `now` until `end`, rounded up. `None` once `end` is reached.
fn days_until(end: DateTime<Utc>, now: DateTime<Utc>) -> Option<u32> {
    let remaining = end - now;
    if remaining <= Duration::zero() {
        return None;
    }

    let whole = remaining.num_days();
    let days = if remaining > Duration::days(whole) {
        whole + 1
    } else {
        whole
    };

    Some(u32::try_from(days).unwrap_or(u32::MAX))
}

/// Inconsistency in a stored billing record.
///
/// Never fatal: the decision omits or ignores the affected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityAnomaly {
    /// Usable provider subscription without a period end
    MissingPeriodEnd {
        status: SubscriptionStatus,
    },
    /// Trial end stored on a record that is not trialing
    TrialEndOnNonTrial {
        status: SubscriptionStatus,
    },
    /// Trialing record with no trial end
    TrialingWithoutTrialEnd,
    /// Trial ended but the stored status was not updated yet
    StaleTrial {
        trial_end: DateTime<Utc>,
    },
}

impl fmt::Display for IntegrityAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPeriodEnd { status } => {
                write!(f, "{status} subscription has no current period end")
            }
            Self::TrialEndOnNonTrial { status } => {
                write!(f, "trial end set on {status} subscription, ignored")
            }
            Self::TrialingWithoutTrialEnd => write!(f, "trialing subscription has no trial end"),
            Self::StaleTrial { trial_end } => write!(
                f,
                "trial ended at {} but status is still trialing",
                trial_end.to_rfc3339()
            ),
        }
    }
}

/// Report integrity anomalies in a record as seen at `now`
pub fn integrity_anomalies(record: &BillingRecord, now: DateTime<Utc>) -> Vec<IntegrityAnomaly> {
    let mut anomalies = Vec::new();

    match record.status {
        SubscriptionStatus::Active | SubscriptionStatus::PastDue
            if record.billing_subscription_ref.is_some()
                && record.current_period_end.is_none() =>
        {
            anomalies.push(IntegrityAnomaly::MissingPeriodEnd {
                status: record.status,
            });
        }
        _ => {}
    }

    match (record.status, record.trial_end) {
        (SubscriptionStatus::Trialing, None) => {
            anomalies.push(IntegrityAnomaly::TrialingWithoutTrialEnd);
        }
        (SubscriptionStatus::Trialing, Some(trial_end)) if trial_end <= now => {
            anomalies.push(IntegrityAnomaly::StaleTrial { trial_end });
        }
        (SubscriptionStatus::Trialing, Some(_)) | (_, None) => {}
        (status, Some(_)) => {
            anomalies.push(IntegrityAnomaly::TrialEndOnNonTrial { status });
        }
    }

    anomalies
}
