//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::RoleName;

/// A registered user in the TicketHub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique email address, used as the login identifier.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Foreign key into the `roles` table.
    pub role_id: i64,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role id.
    pub role_id: i64,
}

/// Credential read model: a user row joined with its role name.
///
/// This is the shape credential lookup returns during login. The core
/// never mutates it.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// The user's unique identifier.
    pub user_id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// The user's role, parsed from the joined role name.
    pub role: RoleName,
}
