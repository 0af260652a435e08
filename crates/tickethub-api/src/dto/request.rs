//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use tickethub_core::types::pagination::PageRequest;
use tickethub_database::repositories::ticket::TicketFilter;
use tickethub_entity::ticket::{TicketPriority, TicketStatus};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create ticket request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTicketRequest {
    /// Short summary.
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    /// Full description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Priority; defaults to `MEDIUM`.
    pub priority: Option<TicketPriority>,
    /// Initial status; defaults to `OPEN`. The reference accepts any
    /// starting status, so this field is honored as given.
    pub status: Option<TicketStatus>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Content update request body; absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTicketRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<TicketPriority>,
    /// New due date; explicit `null` clears it, absence leaves it alone.
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// Distinguishes an absent field (outer `None`) from an explicit `null`
/// (inner `None`): any present value, including `null`, maps to `Some`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// Status change request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status.
    pub status: TicketStatus,
}

/// Query parameters for ticket list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TicketListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Filter by status.
    pub status: Option<TicketStatus>,
    /// Filter by priority.
    pub priority: Option<TicketPriority>,
    /// Substring search over title, description, and ticket number.
    pub search: Option<String>,
    /// Sort column (whitelisted).
    pub sort_by: Option<String>,
    /// Sort direction: "asc" or "desc".
    pub sort_order: Option<String>,
}

impl TicketListQuery {
    /// The pagination portion of the query.
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }

    /// The filter portion of the query.
    pub fn filter(&self) -> TicketFilter {
        TicketFilter {
            status: self.status,
            priority: self.priority,
            search: self.search.clone(),
        }
    }
}
