//! Access decision logic.

use std::fmt;

use tickethub_core::error::AppError;

use crate::identity::Identity;

use super::operation::Operation;

/// Why an operation was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No verified identity was presented.
    Unauthenticated,
    /// The caller's role is not in the operation's allowed set.
    InsufficientRole,
    /// The operation is ownership-scoped and the caller is neither the
    /// owner nor an admin.
    NotOwner,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "User not authenticated"),
            Self::InsufficientRole => write!(f, "Access denied. Insufficient permissions"),
            Self::NotOwner => write!(f, "Access denied. Not the resource owner"),
        }
    }
}

/// The outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The operation may proceed.
    Allow,
    /// The operation is denied for the given reason.
    Deny(DenyReason),
}

/// The single decision point for role and ownership checks.
///
/// A pure function of its inputs: the same (identity, operation, owner)
/// triple always produces the same decision.
#[derive(Debug, Clone, Default)]
pub struct AccessGuard;

impl AccessGuard {
    /// Creates a new access guard.
    pub fn new() -> Self {
        Self
    }

    /// Decide whether `identity` may perform `operation`.
    ///
    /// `resource_owner` is the owning user id for ownership-scoped
    /// operations; it is ignored for the rest. Rules are evaluated in
    /// order: authentication, then role, then ownership.
    pub fn authorize(
        &self,
        identity: Option<&Identity>,
        operation: Operation,
        resource_owner: Option<i64>,
    ) -> Decision {
        let Some(identity) = identity else {
            return Decision::Deny(DenyReason::Unauthenticated);
        };

        if !operation.required_roles().contains(&identity.role()) {
            return Decision::Deny(DenyReason::InsufficientRole);
        }

        if operation.is_ownership_scoped()
            && !identity.is_admin()
            && resource_owner != Some(identity.user_id())
        {
            return Decision::Deny(DenyReason::NotOwner);
        }

        Decision::Allow
    }

    /// Like [`authorize`](Self::authorize), but for an already-verified
    /// caller, mapping a denial into an [`AppError`].
    pub fn require(
        &self,
        identity: &Identity,
        operation: Operation,
        resource_owner: Option<i64>,
    ) -> Result<(), AppError> {
        match self.authorize(Some(identity), operation, resource_owner) {
            Decision::Allow => Ok(()),
            Decision::Deny(DenyReason::Unauthenticated) => {
                Err(AppError::unauthorized(DenyReason::Unauthenticated.to_string()))
            }
            Decision::Deny(reason) => Err(AppError::forbidden(reason.to_string())),
        }
    }
}
