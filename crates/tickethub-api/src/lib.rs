//! # tickethub-api
//!
//! HTTP API layer for TicketHub, built on Axum. This crate is thin by
//! design: handlers translate between wire DTOs and the service layer,
//! and every protected route authenticates through one extractor.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
