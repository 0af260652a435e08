//! Role entity and the closed set of role names.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// A role record as stored in the `roles` table.
///
/// Roles are seeded by migration; registration looks up the default
/// `USER` role at runtime and treats its absence as a fatal
/// configuration error.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: i64,
    /// Role name (`USER` or `ADMIN`).
    pub name: String,
    /// Human-readable description.
    pub description: Option<String>,
}

/// The closed set of roles the system understands.
///
/// A role name outside this set is rejected wherever it appears — in a
/// token payload, a database row, or configuration — never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleName {
    /// Regular user: owns and manages their own tickets.
    User,
    /// Administrator: full ticket visibility and status control.
    Admin,
}

impl RoleName {
    /// Check if this role is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role name as stored in the `roles` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = tickethub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(tickethub_core::AppError::validation(format!(
                "Unknown role: '{s}'. Expected one of: USER, ADMIN"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips() {
        assert_eq!("USER".parse::<RoleName>().unwrap(), RoleName::User);
        assert_eq!("ADMIN".parse::<RoleName>().unwrap(), RoleName::Admin);
    }

    #[test]
    fn test_unknown_role_is_rejected_not_defaulted() {
        assert!("MANAGER".parse::<RoleName>().is_err());
        assert!("user".parse::<RoleName>().is_err());
        assert!("".parse::<RoleName>().is_err());
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        let json = serde_json::to_string(&RoleName::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
        let parsed: RoleName = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(parsed, RoleName::User);
    }
}
