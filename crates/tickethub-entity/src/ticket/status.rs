//! Ticket status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of a ticket.
///
/// No transition between states is forbidden; `CLOSED` tickets may be
/// re-opened. Entering `RESOLVED` or `CLOSED` stamps a historical
/// timestamp on the ticket (see the lifecycle engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Newly created, awaiting triage.
    Open,
    /// Being actively worked on.
    InProgress,
    /// Work finished, awaiting confirmation.
    Resolved,
    /// Confirmed done (or abandoned).
    Closed,
}

impl TicketStatus {
    /// Return the status as its wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let parsed: TicketStatus = serde_json::from_str("\"CLOSED\"").unwrap();
        assert_eq!(parsed, TicketStatus::Closed);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(serde_json::from_str::<TicketStatus>("\"ARCHIVED\"").is_err());
    }
}
