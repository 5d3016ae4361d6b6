//! Subscription handlers

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use rehearsal_types::{AccessDecision, EntitlementCheck};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::handlers::shared::{record_lookup, record_op_duration};
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Body of a successful subscription lookup.
///
/// `subscription` is `null` when the caller has no billing record; failures
/// use [`crate::error::ErrorResponse`], which adds `error` and `code`.
#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub subscription: Option<AccessDecision>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/billing/subscription
pub async fn get_subscription(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SubscriptionResponse>> {
    let start = Instant::now();

    let result = state
        .subscriptions
        .get_subscription_info(&auth.user_id)
        .await;

    record_lookup(&result);
    record_op_duration("get_subscription", start, result.is_ok());

    Ok(Json(SubscriptionResponse {
        subscription: result?,
    }))
}

/// GET /api/v1/billing/access
pub async fn get_access(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<EntitlementCheck>> {
    let start = Instant::now();

    let result = state.subscriptions.check_access(&auth.user_id).await;

    record_op_duration("check_access", start, result.is_ok());

    let check = result?;
    tracing::debug!(
        user_id = %auth.user_id,
        allowed = check.allowed,
        reason = check.reason.as_deref(),
        "Entitlement checked"
    );

    Ok(Json(check))
}
