//! Role and ownership authorization.

pub mod access;
pub mod operation;

pub use access::{AccessGuard, Decision, DenyReason};
pub use operation::Operation;
