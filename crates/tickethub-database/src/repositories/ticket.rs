//! Ticket repository implementation.

use sqlx::PgPool;

use tickethub_core::error::{AppError, ErrorKind};
use tickethub_core::result::AppResult;
use tickethub_core::types::pagination::{PageRequest, PageResponse};
use tickethub_entity::ticket::model::CreateTicket;
use tickethub_entity::ticket::{Ticket, TicketPriority, TicketStatus};

/// Optional filters applied to ticket list queries.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// Restrict to a single status.
    pub status: Option<TicketStatus>,
    /// Restrict to a single priority.
    pub priority: Option<TicketPriority>,
    /// Case-insensitive substring match against title, description, and
    /// ticket number.
    pub search: Option<String>,
}

/// Sort order for ticket list queries.
///
/// The column set is a fixed whitelist; anything else falls back to the
/// default so request input never reaches the SQL text.
#[derive(Debug, Clone)]
pub struct TicketSort {
    column: &'static str,
    descending: bool,
}

impl TicketSort {
    /// Build a sort order from raw request values.
    pub fn new(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let column = match sort_by {
            Some("created_at") => "created_at",
            Some("updated_at") => "updated_at",
            Some("title") => "title",
            Some("priority") => "priority",
            Some("status") => "status",
            _ => "created_at",
        };
        let descending = !matches!(sort_order, Some(o) if o.eq_ignore_ascii_case("asc"));
        Self { column, descending }
    }

    fn to_sql(&self) -> String {
        format!(
            "ORDER BY {} {}",
            self.column,
            if self.descending { "DESC" } else { "ASC" }
        )
    }
}

impl Default for TicketSort {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Repository for ticket CRUD and list queries.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Create a new ticket repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a ticket by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find ticket by id", e)
            })
    }

    /// List tickets matching the filter, paginated.
    ///
    /// Pass `created_by` to scope the listing to a single owner.
    pub async fn find_all(
        &self,
        created_by: Option<i64>,
        filter: &TicketFilter,
        sort: &TicketSort,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Ticket>> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));

        const WHERE_CLAUSE: &str = "WHERE ($1::bigint IS NULL OR created_by = $1) \
             AND ($2::ticket_status IS NULL OR status = $2) \
             AND ($3::ticket_priority IS NULL OR priority = $3) \
             AND ($4::text IS NULL OR title ILIKE $4 OR description ILIKE $4 \
                  OR ticket_number ILIKE $4)";

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM tickets {WHERE_CLAUSE}"))
            .bind(created_by)
            .bind(filter.status)
            .bind(filter.priority)
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tickets", e))?;

        let tickets = sqlx::query_as::<_, Ticket>(&format!(
            "SELECT * FROM tickets {WHERE_CLAUSE} {} LIMIT $5 OFFSET $6",
            sort.to_sql()
        ))
        .bind(created_by)
        .bind(filter.status)
        .bind(filter.priority)
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tickets", e))?;

        Ok(PageResponse::new(
            tickets,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new ticket.
    pub async fn create(&self, data: &CreateTicket) -> AppResult<Ticket> {
        sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets \
               (ticket_number, title, description, status, priority, created_by, due_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&data.ticket_number)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.status)
        .bind(data.priority)
        .bind(data.created_by)
        .bind(data.due_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("tickets_ticket_number_key") =>
            {
                AppError::conflict(format!(
                    "Ticket number '{}' already exists",
                    data.ticket_number
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create ticket", e),
        })
    }

    /// Persist all mutable fields of a ticket in one statement.
    ///
    /// The store serializes concurrent writers; callers compute the full
    /// desired state and hand it over as a single read-modify-write.
    pub async fn update(&self, ticket: &Ticket) -> AppResult<Ticket> {
        sqlx::query_as::<_, Ticket>(
            "UPDATE tickets SET title = $2, description = $3, status = $4, priority = $5, \
                                due_date = $6, resolved_at = $7, closed_at = $8, updated_at = $9 \
             WHERE id = $1 RETURNING *",
        )
        .bind(ticket.id)
        .bind(&ticket.title)
        .bind(&ticket.description)
        .bind(ticket.status)
        .bind(ticket.priority)
        .bind(ticket.due_date)
        .bind(ticket.resolved_at)
        .bind(ticket.closed_at)
        .bind(ticket.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update ticket", e))?
        .ok_or_else(|| AppError::not_found(format!("Ticket {} not found", ticket.id)))
    }

    /// Delete a ticket by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete ticket", e))?;

        Ok(result.rows_affected() > 0)
    }
}
