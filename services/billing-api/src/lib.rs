//! Rehearsal Billing API
//!
//! HTTP surface over the subscription query service.
//!
//! ## REST Endpoints
//!
//! - `GET /api/v1/billing/subscription` - Caller's access decision, or `null`
//! - `GET /api/v1/billing/access` - Premium allow/deny with a reason
//!
//! ## Health Endpoints
//!
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::build_router;
