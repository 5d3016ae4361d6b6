//! Caller identity
//!
//! The identity provider issues signed session tokens; this module only
//! verifies them and extracts the user id. Tokens are read from the
//! `Authorization: Bearer` header or the `__session` cookie.

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::header;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use rehearsal_types::UserId;

use crate::config::AuthConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Cookie set by the identity provider's frontend SDK
pub const SESSION_COOKIE: &str = "__session";

/// Identity verification errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No credentials on the request
    #[error("missing token")]
    MissingToken,

    /// Malformed token, bad signature, wrong issuer, or bad subject
    #[error("invalid token")]
    InvalidToken,

    /// Token past its expiry
    #[error("token expired")]
    TokenExpired,
}

/// Verifies a session token and returns the caller's user id
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}

/// Claims we rely on from the identity provider's session token
#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: String,
}

/// HS256 session token verifier
#[derive(Clone)]
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    /// Create a verifier from auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &config.jwt_issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let data = decode::<SessionClaims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        UserId::parse(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}

impl std::fmt::Debug for JwtIdentityVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIdentityVerifier").finish_non_exhaustive()
    }
}

/// Authenticated caller extracted from the request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = extract_token(parts).ok_or_else(|| {
            tracing::debug!(error = %AuthError::MissingToken, "Rejecting request");
            ApiError::Unauthenticated
        })?;

        let user_id = app_state.identity.verify(&token).await.map_err(|e| {
            tracing::debug!(error = %e, "Token validation failed");
            ApiError::Unauthenticated
        })?;

        Ok(Self { user_id })
    }
}

/// Extract token from Authorization header or session cookie
fn extract_token(parts: &Parts) -> Option<String> {
    // Try Authorization header first (Bearer token)
    if let Some(value) = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        let mut split = value.splitn(2, ' ');
        if let (Some(scheme), Some(token)) = (split.next(), split.next()) {
            let token = token.trim();
            if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    // Try session cookie
    parts
        .headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
