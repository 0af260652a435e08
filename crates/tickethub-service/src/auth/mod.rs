//! Registration and login services.

pub mod registration;
pub mod service;

pub use registration::RegistrationValidator;
pub use service::AuthService;
