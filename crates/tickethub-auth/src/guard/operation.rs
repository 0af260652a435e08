//! The operations the access guard knows about, with their role and
//! ownership requirements.

use tickethub_entity::user::RoleName;

/// Every guarded operation in the system.
///
/// The role and ownership requirements live here, in one table, instead
/// of being re-derived at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List every ticket in the system.
    ListAllTickets,
    /// List the caller's own tickets.
    ListOwnTickets,
    /// View a single ticket by id.
    ViewTicket,
    /// Create a new ticket.
    CreateTicket,
    /// Edit a ticket's title, description, priority, or due date.
    EditTicketContent,
    /// Move a ticket to a different lifecycle status.
    ChangeTicketStatus,
    /// Hard-delete a ticket.
    DeleteTicket,
}

impl Operation {
    /// The roles allowed to perform this operation.
    ///
    /// Listing every ticket and changing status are admin-only; everything
    /// else is open to any authenticated role. Viewing a ticket by id is
    /// deliberately not ownership-scoped.
    pub fn required_roles(&self) -> &'static [RoleName] {
        match self {
            Self::ListAllTickets | Self::ChangeTicketStatus => &[RoleName::Admin],
            Self::ListOwnTickets
            | Self::ViewTicket
            | Self::CreateTicket
            | Self::EditTicketContent
            | Self::DeleteTicket => &[RoleName::User, RoleName::Admin],
        }
    }

    /// Whether this operation additionally requires the caller to own the
    /// target resource (admins are exempt).
    pub fn is_ownership_scoped(&self) -> bool {
        matches!(self, Self::EditTicketContent | Self::DeleteTicket)
    }
}
