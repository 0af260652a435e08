//! Ticket entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::priority::TicketPriority;
use super::status::TicketStatus;

/// A support ticket.
///
/// `resolved_at` and `closed_at` are historical markers: they record the
/// most recent time the ticket entered `RESOLVED`/`CLOSED` and survive
/// re-opening.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    /// Unique ticket identifier.
    pub id: i64,
    /// Human-facing ticket number, assigned once at creation.
    pub ticket_number: String,
    /// Short summary.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Current lifecycle status.
    pub status: TicketStatus,
    /// Priority level.
    pub priority: TicketPriority,
    /// The user who created (and owns) the ticket.
    pub created_by: i64,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// When the ticket last entered `RESOLVED`, if ever.
    pub resolved_at: Option<DateTime<Utc>>,
    /// When the ticket last entered `CLOSED`, if ever.
    pub closed_at: Option<DateTime<Utc>>,
    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicket {
    /// Generated ticket number.
    pub ticket_number: String,
    /// Short summary.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Initial status. The reference behavior accepts a caller-supplied
    /// value here rather than forcing `OPEN`.
    pub status: TicketStatus,
    /// Priority level.
    pub priority: TicketPriority,
    /// Creator and owner.
    pub created_by: i64,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}
