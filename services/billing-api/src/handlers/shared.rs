//! Shared handler utilities
//!
//! Metric helpers used across handlers, so names and labels stay consistent.

use std::time::Instant;

use rehearsal_types::AccessDecision;

/// Record HTTP operation duration with result label.
///
/// Labels: operation, result (ok/err)
#[inline]
pub fn record_op_duration(operation: &'static str, start: Instant, success: bool) {
    let result = if success { "ok" } else { "err" };
    metrics::histogram!(
        "billing_operation_duration_seconds",
        "operation" => operation,
        "result" => result
    )
    .record(start.elapsed().as_secs_f64());
}

/// Label for the outcome of a subscription lookup
pub fn lookup_outcome<E>(result: &Result<Option<AccessDecision>, E>) -> &'static str {
    match result {
        Ok(Some(_)) => "found",
        Ok(None) => "absent",
        Err(_) => "error",
    }
}

/// Count a subscription lookup by outcome (found/absent/error)
#[inline]
pub fn record_lookup<E>(result: &Result<Option<AccessDecision>, E>) {
    metrics::counter!(
        "billing_subscription_lookups_total",
        "outcome" => lookup_outcome(result)
    )
    .increment(1);
}
