//! Route definitions for the TicketHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(ticket_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Ticket CRUD and lifecycle endpoints
fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(handlers::ticket::list_all))
        .route("/tickets", post(handlers::ticket::create_ticket))
        .route("/tickets/my-tickets", get(handlers::ticket::my_tickets))
        .route("/tickets/{id}", get(handlers::ticket::get_ticket))
        .route("/tickets/{id}", put(handlers::ticket::update_ticket))
        .route("/tickets/{id}", delete(handlers::ticket::delete_ticket))
        .route("/tickets/{id}/status", put(handlers::ticket::update_status))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
