//! Application state for the Billing API service.

use std::sync::Arc;

use rehearsal_billing_core::SubscriptionQueryService;

use crate::auth::IdentityVerifier;
use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Subscription lookups and access derivation
    pub subscriptions: Arc<SubscriptionQueryService>,
    /// Session token verification
    pub identity: Arc<dyn IdentityVerifier>,
    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        subscriptions: SubscriptionQueryService,
        identity: Arc<dyn IdentityVerifier>,
        config: Config,
    ) -> Self {
        Self {
            subscriptions: Arc::new(subscriptions),
            identity,
            config: Arc::new(config),
        }
    }

    /// Get request timeout from config
    pub fn request_timeout(&self) -> std::time::Duration {
        self.config.request_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("subscriptions", &self.subscriptions)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
