//! Ticket handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use tickethub_core::error::AppError;
use tickethub_core::types::pagination::PageResponse;
use tickethub_database::repositories::ticket::TicketSort;
use tickethub_service::ticket::service::{NewTicket, TicketContentUpdate};

use crate::dto::request::{
    CreateTicketRequest, TicketListQuery, UpdateStatusRequest, UpdateTicketRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse, TicketResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

fn to_page_response(page: PageResponse<tickethub_entity::ticket::Ticket>) -> PageResponse<TicketResponse> {
    PageResponse::new(
        page.items.into_iter().map(TicketResponse::from).collect(),
        page.page,
        page.page_size,
        page.total_items,
    )
}

/// GET /api/tickets — every ticket in the system (admin only).
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<ApiResponse<PageResponse<TicketResponse>>>, ApiError> {
    let sort = TicketSort::new(query.sort_by.as_deref(), query.sort_order.as_deref());
    let page = state
        .ticket_service
        .list_all(&auth, &query.filter(), &sort, &query.page_request())
        .await?;

    Ok(Json(ApiResponse::ok(to_page_response(page))))
}

/// GET /api/tickets/my-tickets — the caller's tickets.
pub async fn my_tickets(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<ApiResponse<PageResponse<TicketResponse>>>, ApiError> {
    let page = state
        .ticket_service
        .list_mine(&auth, &query.filter(), &query.page_request())
        .await?;

    Ok(Json(ApiResponse::ok(to_page_response(page))))
}

/// GET /api/tickets/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<TicketResponse>>, ApiError> {
    let ticket = state.ticket_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(TicketResponse::from(ticket))))
}

/// POST /api/tickets
pub async fn create_ticket(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TicketResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let ticket = state
        .ticket_service
        .create(
            &auth,
            NewTicket {
                title: req.title,
                description: req.description,
                priority: req.priority,
                status: req.status,
                due_date: req.due_date,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(TicketResponse::from(ticket))),
    ))
}

/// PUT /api/tickets/{id} — content edit (owner or admin).
pub async fn update_ticket(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTicketRequest>,
) -> Result<Json<ApiResponse<TicketResponse>>, ApiError> {
    let ticket = state
        .ticket_service
        .update_content(
            &auth,
            id,
            TicketContentUpdate {
                title: req.title,
                description: req.description,
                priority: req.priority,
                due_date: req.due_date,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(TicketResponse::from(ticket))))
}

/// PUT /api/tickets/{id}/status — lifecycle transition (admin only).
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<TicketResponse>>, ApiError> {
    let ticket = state
        .ticket_service
        .change_status(&auth, id, req.status)
        .await?;

    Ok(Json(ApiResponse::ok(TicketResponse::from(ticket))))
}

/// DELETE /api/tickets/{id} — hard delete (owner or admin).
pub async fn delete_ticket(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.ticket_service.delete(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Ticket deleted successfully".to_string(),
    })))
}
