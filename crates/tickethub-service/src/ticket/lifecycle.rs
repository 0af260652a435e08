//! Ticket status transitions and their side effects.

use chrono::{DateTime, Utc};

use tickethub_entity::ticket::{Ticket, TicketStatus};

/// Applies status transitions to tickets.
///
/// The engine does not restrict which transitions are legal — any status
/// may be set from any other, including re-opening a closed ticket. Its
/// contract is the side effects:
///
/// - entering `RESOLVED` stamps `resolved_at` (refreshed on re-entry);
/// - entering `CLOSED` stamps `closed_at` (refreshed on re-entry);
/// - entering `OPEN` or `IN_PROGRESS` clears neither timestamp — they are
///   historical markers, not "currently resolved" flags;
/// - every transition bumps `updated_at`.
///
/// Who may request a transition is the access guard's concern, not the
/// engine's.
#[derive(Debug, Clone, Default)]
pub struct LifecycleEngine;

impl LifecycleEngine {
    /// Creates a new lifecycle engine.
    pub fn new() -> Self {
        Self
    }

    /// Moves `ticket` to `status` as of `now`, applying side effects.
    pub fn apply(&self, ticket: &mut Ticket, status: TicketStatus, now: DateTime<Utc>) {
        ticket.status = status;
        ticket.updated_at = now;

        match status {
            TicketStatus::Resolved => ticket.resolved_at = Some(now),
            TicketStatus::Closed => ticket.closed_at = Some(now),
            TicketStatus::Open | TicketStatus::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tickethub_entity::ticket::TicketPriority;

    fn ticket_at(created: DateTime<Utc>) -> Ticket {
        Ticket {
            id: 1,
            ticket_number: "TICKET-1000".to_string(),
            title: "Printer on fire".to_string(),
            description: "Smoke everywhere".to_string(),
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            created_by: 7,
            due_date: None,
            resolved_at: None,
            closed_at: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_resolving_stamps_resolved_at() {
        let engine = LifecycleEngine::new();
        let t0 = Utc::now();
        let mut ticket = ticket_at(t0);

        let t1 = t0 + Duration::minutes(5);
        engine.apply(&mut ticket, TicketStatus::Resolved, t1);

        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(ticket.resolved_at, Some(t1));
        assert_eq!(ticket.updated_at, t1);
        assert_eq!(ticket.closed_at, None);
    }

    #[test]
    fn test_reopening_keeps_history() {
        let engine = LifecycleEngine::new();
        let t0 = Utc::now();
        let mut ticket = ticket_at(t0);

        let t1 = t0 + Duration::minutes(5);
        engine.apply(&mut ticket, TicketStatus::Resolved, t1);
        let t2 = t0 + Duration::minutes(10);
        engine.apply(&mut ticket, TicketStatus::Open, t2);

        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.resolved_at, Some(t1), "re-opening must not clear history");
        assert_eq!(ticket.updated_at, t2);
    }

    #[test]
    fn test_reclosing_refreshes_closed_at() {
        let engine = LifecycleEngine::new();
        let t0 = Utc::now();
        let mut ticket = ticket_at(t0);

        let t1 = t0 + Duration::minutes(5);
        engine.apply(&mut ticket, TicketStatus::Closed, t1);
        let t2 = t0 + Duration::minutes(10);
        engine.apply(&mut ticket, TicketStatus::Open, t2);
        let t3 = t0 + Duration::minutes(15);
        engine.apply(&mut ticket, TicketStatus::Closed, t3);

        assert_eq!(
            ticket.closed_at,
            Some(t3),
            "closed_at reflects the most recent CLOSED transition"
        );
    }

    #[test]
    fn test_in_progress_only_bumps_updated_at() {
        let engine = LifecycleEngine::new();
        let t0 = Utc::now();
        let mut ticket = ticket_at(t0);

        let t1 = t0 + Duration::minutes(5);
        engine.apply(&mut ticket, TicketStatus::Resolved, t1);
        let t2 = t0 + Duration::minutes(10);
        engine.apply(&mut ticket, TicketStatus::InProgress, t2);

        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.resolved_at, Some(t1));
        assert_eq!(ticket.closed_at, None);
        assert_eq!(ticket.updated_at, t2);
    }

    #[test]
    fn test_no_transition_is_forbidden() {
        // Closed tickets may move anywhere, including straight back to
        // IN_PROGRESS. This permissiveness is deliberate.
        let engine = LifecycleEngine::new();
        let t0 = Utc::now();
        let mut ticket = ticket_at(t0);

        engine.apply(&mut ticket, TicketStatus::Closed, t0 + Duration::minutes(1));
        engine.apply(
            &mut ticket,
            TicketStatus::InProgress,
            t0 + Duration::minutes(2),
        );
        assert_eq!(ticket.status, TicketStatus::InProgress);
    }

    #[test]
    fn test_reentering_resolved_refreshes_timestamp() {
        let engine = LifecycleEngine::new();
        let t0 = Utc::now();
        let mut ticket = ticket_at(t0);

        let t1 = t0 + Duration::minutes(5);
        engine.apply(&mut ticket, TicketStatus::Resolved, t1);
        let t2 = t0 + Duration::minutes(10);
        engine.apply(&mut ticket, TicketStatus::Resolved, t2);

        assert_eq!(ticket.resolved_at, Some(t2));
    }
}
