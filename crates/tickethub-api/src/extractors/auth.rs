//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header and runs it through the token verifier.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use tickethub_auth::identity::Identity;
use tickethub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller available in handlers.
///
/// Token verification is the only check performed per request; the
/// identity comes entirely from the token payload.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Identity);

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("No token provided"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("No token provided"))?;

        let identity = state.jwt_decoder.verify(token)?;

        Ok(AuthUser(identity))
    }
}
