//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use tickethub_auth::guard::AccessGuard;
use tickethub_auth::jwt::decoder::JwtDecoder;
use tickethub_auth::jwt::encoder::JwtEncoder;
use tickethub_auth::password::PasswordHasher;
use tickethub_core::config::AppConfig;
use tickethub_database::repositories::role::RoleRepository;
use tickethub_database::repositories::ticket::TicketRepository;
use tickethub_database::repositories::user::UserRepository;
use tickethub_service::auth::service::AuthService;
use tickethub_service::ticket::service::TicketService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,
    /// Role/ownership decision point.
    pub guard: Arc<AccessGuard>,

    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Role repository.
    pub role_repo: Arc<RoleRepository>,
    /// Ticket repository.
    pub ticket_repo: Arc<TicketRepository>,

    /// Registration and login service.
    pub auth_service: Arc<AuthService>,
    /// Ticket service.
    pub ticket_service: Arc<TicketService>,
}
