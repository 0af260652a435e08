//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tickethub_entity::user::RoleName;

/// JWT claims payload embedded in every token.
///
/// The payload is exactly the identity (user id + role) plus the standard
/// issued-at/expiry claims. There is no refresh token and no token id;
/// expiry is the only invalidation mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: i64,
    /// User role at the time of token issuance.
    pub role: RoleName,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let now = Utc::now().timestamp();
        let live = Claims {
            sub: 1,
            role: RoleName::User,
            iat: now,
            exp: now + 60,
        };
        assert!(!live.is_expired());

        let at_boundary = Claims {
            sub: 1,
            role: RoleName::User,
            iat: now - 300,
            exp: now,
        };
        assert!(at_boundary.is_expired());
    }
}
