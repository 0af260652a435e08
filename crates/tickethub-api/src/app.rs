//! Application builder — wires repositories, services, router, and
//! middleware into a running Axum server.

use std::sync::Arc;

use axum::{Router, middleware as axum_middleware};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tickethub_auth::guard::AccessGuard;
use tickethub_auth::jwt::decoder::JwtDecoder;
use tickethub_auth::jwt::encoder::JwtEncoder;
use tickethub_auth::password::PasswordHasher;
use tickethub_core::config::AppConfig;
use tickethub_core::config::app::CorsConfig;
use tickethub_core::error::AppError;
use tickethub_database::repositories::role::RoleRepository;
use tickethub_database::repositories::ticket::TicketRepository;
use tickethub_database::repositories::user::UserRepository;
use tickethub_service::auth::registration::RegistrationValidator;
use tickethub_service::auth::service::AuthService;
use tickethub_service::ticket::service::TicketService;

use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Constructs the full application state from configuration and a
/// connected pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let role_repo = Arc::new(RoleRepository::new(db_pool.clone()));
    let ticket_repo = Arc::new(TicketRepository::new(db_pool.clone()));

    // ── Auth primitives ──────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let guard = Arc::new(AccessGuard::new());

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&role_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        RegistrationValidator::new(&config.auth),
    ));
    let ticket_service = Arc::new(TicketService::new(
        Arc::clone(&ticket_repo),
        Arc::clone(&guard),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        guard,
        user_repo,
        role_repo,
        ticket_repo,
        auth_service,
        ticket_service,
    }
}

/// Runs the TicketHub server with the given configuration and database
/// pool until a shutdown signal arrives.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("TicketHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("TicketHub server shut down gracefully");
    Ok(())
}

/// Build CORS layer from configuration
fn build_cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    use axum::http::Method;
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any).allow_headers(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
