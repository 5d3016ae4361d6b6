//! Common test utilities for billing-api integration tests

pub mod mock_repos;

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use billing_api::auth::JwtIdentityVerifier;
use billing_api::build_router;
use billing_api::config::Config;
use billing_api::state::AppState;
use rehearsal_billing_core::{FixedClock, SubscriptionQueryService};

#[allow(unused_imports)]
pub use mock_repos::{billing_record, MockBillingRecordRepository};

pub const TEST_SECRET: &str = "test-session-secret";

/// Instant the service clock is pinned to
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()
}

/// Router over an in-memory store, pinned clock, no metrics
pub fn test_app(repo: &MockBillingRecordRepository) -> Router {
    test_app_with(repo, &[])
}

/// Same as [`test_app`] with extra configuration variables
pub fn test_app_with(repo: &MockBillingRecordRepository, vars: &[(&str, &str)]) -> Router {
    let config = Config::from_vars(|key| match key {
        "DATABASE_URL" => Some("postgres://unused/test".to_string()),
        "AUTH_JWT_SECRET" => Some(TEST_SECRET.to_string()),
        _ => vars
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string()),
    })
    .unwrap();

    let subscriptions =
        SubscriptionQueryService::with_clock(Arc::new(repo.clone()), Arc::new(FixedClock(now())));
    let identity = Arc::new(JwtIdentityVerifier::new(&config.auth));

    build_router(AppState::new(subscriptions, identity, config), None)
}

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    exp: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

fn sign(sub: &str, exp: u64, secret: &str) -> String {
    encode(
        &Header::default(),
        &Claims { sub, exp },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Valid session token for `user_id`
pub fn session_token(user_id: &str) -> String {
    sign(user_id, unix_now() + 3600, TEST_SECRET)
}

/// Token that expired an hour ago
#[allow(dead_code)]
pub fn expired_token(user_id: &str) -> String {
    sign(user_id, unix_now() - 3600, TEST_SECRET)
}

/// Token signed with the wrong key
#[allow(dead_code)]
pub fn forged_token(user_id: &str) -> String {
    sign(user_id, unix_now() + 3600, "not-the-secret")
}
