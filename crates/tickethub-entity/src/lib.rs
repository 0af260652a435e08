//! # tickethub-entity
//!
//! Domain entity models for TicketHub: users and roles on the account
//! side, tickets and their lifecycle enums on the tracking side.

pub mod ticket;
pub mod user;
