//! Premium feature gating

use rehearsal_types::{AccessDecision, EntitlementCheck};

/// Allow/deny rule for premium features.
///
/// Only `is_premium` decides; the reason is for display.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGate;

impl AccessGate {
    /// Check a decision, `None` meaning the user never subscribed
    pub fn check(decision: Option<&AccessDecision>) -> EntitlementCheck {
        match decision {
            None => EntitlementCheck::deny("no subscription"),
            Some(d) if d.is_premium => EntitlementCheck::allow(),
            Some(d) if d.is_expired_trial() => EntitlementCheck::deny("trial expired"),
            Some(d) => EntitlementCheck::deny(format!("subscription {}", d.status)),
        }
    }
}
