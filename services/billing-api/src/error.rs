//! Error types for the Billing API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use rehearsal_billing_core::BillingError;
use rehearsal_types::AccessDecision;

/// API error response
///
/// Keeps the shape of a successful subscription response so clients can
/// always read `subscription` first.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub subscription: Option<AccessDecision>,
    pub error: String,
    pub code: &'static str,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("request timed out")]
    Timeout,

    #[error("internal server error")]
    Billing(#[from] BillingError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Billing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Timeout => "REQUEST_TIMEOUT",
            Self::Billing(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Log internal errors; the body never carries the cause
        if let Self::Billing(e) = &self {
            tracing::error!(error = ?e, transient = e.is_transient(), "Internal API error");
        }

        let body = ErrorResponse {
            subscription: None,
            error: self.to_string(),
            code,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
