//! User and role entities.

pub mod model;
pub mod role;

pub use model::{CredentialRecord, CreateUser, User};
pub use role::{Role, RoleName};
