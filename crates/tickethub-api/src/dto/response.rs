//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tickethub_entity::ticket::Ticket;
use tickethub_entity::user::CredentialRecord;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Registration result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// The newly created user's id.
    pub user_id: i64,
}

/// Login result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role name.
    pub role: String,
}

impl From<&CredentialRecord> for UserResponse {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            id: record.user_id,
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.to_string(),
        }
    }
}

/// The caller's verified identity, echoed from the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResponse {
    /// User ID.
    pub user_id: i64,
    /// Role name.
    pub role: String,
}

/// Full ticket representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketResponse {
    /// Ticket ID.
    pub id: i64,
    /// Human-facing ticket number.
    pub ticket_number: String,
    /// Short summary.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Current status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Owning user id.
    pub created_by: i64,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// When the ticket last entered RESOLVED, if ever.
    pub resolved_at: Option<DateTime<Utc>>,
    /// When the ticket last entered CLOSED, if ever.
    pub closed_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            ticket_number: ticket.ticket_number,
            title: ticket.title,
            description: ticket.description,
            status: ticket.status.to_string(),
            priority: ticket.priority.to_string(),
            created_by: ticket.created_by,
            due_date: ticket.due_date,
            resolved_at: ticket.resolved_at,
            closed_at: ticket.closed_at,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database status.
    pub database: String,
}
