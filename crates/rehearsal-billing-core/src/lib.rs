//! Rehearsal Billing Core - Subscription access logic
//!
//! Turns stored billing records into the access decisions that gate
//! premium features and trial countdowns.
//!
//! - [`derive`]: pure `(record, now) -> AccessDecision`
//! - [`SubscriptionQueryService`]: store lookup + derivation
//! - [`AccessGate`]: allow/deny on top of a decision
//!
//! # Example
//!
//! ```rust,ignore
//! use rehearsal_billing_core::SubscriptionQueryService;
//! use rehearsal_db::Repositories;
//!
//! let repos = Repositories::new(pool);
//! let subscriptions = SubscriptionQueryService::new(Arc::new(repos.billing_records));
//!
//! match subscriptions.get_subscription_info(&user_id).await? {
//!     Some(decision) if decision.is_premium => { /* unlock */ }
//!     _ => { /* upsell */ }
//! }
//! ```

pub mod clock;
pub mod derive;
pub mod error;
pub mod gate;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use derive::{derive, derive_optional, integrity_anomalies, IntegrityAnomaly};
pub use error::BillingError;
pub use gate::AccessGate;
pub use service::SubscriptionQueryService;

// Re-export decision types from rehearsal-types for convenience
pub use rehearsal_types::{AccessDecision, BillingRecord, EntitlementCheck, SubscriptionStatus};
