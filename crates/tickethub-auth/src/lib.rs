//! # tickethub-auth
//!
//! Authentication and authorization for TicketHub.
//!
//! ## Modules
//!
//! - `jwt` — token issuance and verification (HS256, short-lived)
//! - `password` — Argon2id password hashing and verification
//! - `guard` — the single role/ownership decision point
//! - `identity` — the verified-caller capability type

pub mod guard;
pub mod identity;
pub mod jwt;
pub mod password;

pub use guard::{AccessGuard, Decision, DenyReason, Operation};
pub use identity::Identity;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
