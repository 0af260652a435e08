//! Guard-gated ticket operations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use tickethub_auth::guard::{AccessGuard, Operation};
use tickethub_auth::identity::Identity;
use tickethub_core::error::AppError;
use tickethub_core::types::pagination::{PageRequest, PageResponse};
use tickethub_database::repositories::ticket::{TicketFilter, TicketRepository, TicketSort};
use tickethub_entity::ticket::model::CreateTicket;
use tickethub_entity::ticket::{Ticket, TicketPriority, TicketStatus, number};

use super::lifecycle::LifecycleEngine;

/// Input for creating a ticket.
///
/// The caller may supply an initial status; the reference behavior accepts
/// any status at creation rather than forcing `OPEN`.
#[derive(Debug, Clone)]
pub struct NewTicket {
    /// Short summary.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Priority; defaults to `MEDIUM`.
    pub priority: Option<TicketPriority>,
    /// Initial status; defaults to `OPEN`.
    pub status: Option<TicketStatus>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial content update; absent fields keep their current values.
#[derive(Debug, Clone, Default)]
pub struct TicketContentUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<TicketPriority>,
    /// New due date. `Some(None)` clears it.
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// Ticket CRUD and lifecycle operations, every one gated by the access
/// guard before it touches the store.
#[derive(Debug, Clone)]
pub struct TicketService {
    /// Ticket repository.
    ticket_repo: Arc<TicketRepository>,
    /// Role/ownership decision point.
    guard: Arc<AccessGuard>,
    /// Status transition engine.
    lifecycle: LifecycleEngine,
}

impl TicketService {
    /// Creates a new ticket service.
    pub fn new(ticket_repo: Arc<TicketRepository>, guard: Arc<AccessGuard>) -> Self {
        Self {
            ticket_repo,
            guard,
            lifecycle: LifecycleEngine::new(),
        }
    }

    /// Creates a ticket owned by the caller.
    pub async fn create(&self, identity: &Identity, new: NewTicket) -> Result<Ticket, AppError> {
        self.guard.require(identity, Operation::CreateTicket, None)?;

        let ticket = self
            .ticket_repo
            .create(&CreateTicket {
                ticket_number: number::generate(),
                title: new.title,
                description: new.description,
                status: new.status.unwrap_or(TicketStatus::Open),
                priority: new.priority.unwrap_or(TicketPriority::Medium),
                created_by: identity.user_id(),
                due_date: new.due_date,
            })
            .await?;

        info!(
            ticket_id = ticket.id,
            ticket_number = %ticket.ticket_number,
            user_id = identity.user_id(),
            "Ticket created"
        );

        Ok(ticket)
    }

    /// Lists every ticket in the system. Admin only.
    pub async fn list_all(
        &self,
        identity: &Identity,
        filter: &TicketFilter,
        sort: &TicketSort,
        page: &PageRequest,
    ) -> Result<PageResponse<Ticket>, AppError> {
        self.guard
            .require(identity, Operation::ListAllTickets, None)?;
        self.ticket_repo.find_all(None, filter, sort, page).await
    }

    /// Lists the caller's own tickets.
    pub async fn list_mine(
        &self,
        identity: &Identity,
        filter: &TicketFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<Ticket>, AppError> {
        self.guard
            .require(identity, Operation::ListOwnTickets, None)?;
        self.ticket_repo
            .find_all(
                Some(identity.user_id()),
                filter,
                &TicketSort::default(),
                page,
            )
            .await
    }

    /// Fetches a single ticket by id. Any authenticated user may view any
    /// ticket.
    pub async fn get(&self, identity: &Identity, id: i64) -> Result<Ticket, AppError> {
        self.guard.require(identity, Operation::ViewTicket, None)?;
        self.ticket_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ticket not found"))
    }

    /// Edits a ticket's content fields. Owner or admin.
    ///
    /// Status is not a content field; it moves only through
    /// [`change_status`](Self::change_status).
    pub async fn update_content(
        &self,
        identity: &Identity,
        id: i64,
        update: TicketContentUpdate,
    ) -> Result<Ticket, AppError> {
        let mut ticket = self
            .ticket_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ticket not found"))?;

        self.guard.require(
            identity,
            Operation::EditTicketContent,
            Some(ticket.created_by),
        )?;

        if let Some(title) = update.title {
            ticket.title = title;
        }
        if let Some(description) = update.description {
            ticket.description = description;
        }
        if let Some(priority) = update.priority {
            ticket.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            ticket.due_date = due_date;
        }
        ticket.updated_at = Utc::now();

        let ticket = self.ticket_repo.update(&ticket).await?;

        info!(ticket_id = ticket.id, user_id = identity.user_id(), "Ticket updated");

        Ok(ticket)
    }

    /// Moves a ticket to a new status. Admin only; side effects are the
    /// lifecycle engine's contract.
    pub async fn change_status(
        &self,
        identity: &Identity,
        id: i64,
        status: TicketStatus,
    ) -> Result<Ticket, AppError> {
        self.guard
            .require(identity, Operation::ChangeTicketStatus, None)?;

        let mut ticket = self
            .ticket_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ticket not found"))?;

        self.lifecycle.apply(&mut ticket, status, Utc::now());

        let ticket = self.ticket_repo.update(&ticket).await?;

        info!(
            ticket_id = ticket.id,
            status = %ticket.status,
            user_id = identity.user_id(),
            "Ticket status updated"
        );

        Ok(ticket)
    }

    /// Hard-deletes a ticket. Owner or admin.
    pub async fn delete(&self, identity: &Identity, id: i64) -> Result<(), AppError> {
        let ticket = self
            .ticket_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ticket not found"))?;

        self.guard
            .require(identity, Operation::DeleteTicket, Some(ticket.created_by))?;

        self.ticket_repo.delete(id).await?;

        info!(ticket_id = id, user_id = identity.user_id(), "Ticket deleted");

        Ok(())
    }
}
