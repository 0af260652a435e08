//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use tickethub_core::config::auth::AuthConfig;
use tickethub_core::error::AppError;

use crate::identity::Identity;

use super::claims::Claims;

/// Validates JWT tokens and produces [`Identity`] values.
///
/// The identity is reconstructed strictly from the token payload; the user
/// record is not re-fetched per request. A token stays valid until its
/// expiry even if the account changes underneath it.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning the caller identity.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. The role claim is a known role (enforced by deserialization)
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    _ => AppError::unauthorized("Invalid token"),
                }
            })?;

        let claims = token_data.claims;
        Ok(Identity::new(claims.sub, claims.role))
    }
}
