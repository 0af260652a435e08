//! # tickethub-service
//!
//! Application services for TicketHub. Services orchestrate the auth
//! primitives, the access guard, and the repositories; every ticket
//! operation consults the guard before touching the store.

pub mod auth;
pub mod ticket;

pub use auth::service::AuthService;
pub use ticket::service::TicketService;
