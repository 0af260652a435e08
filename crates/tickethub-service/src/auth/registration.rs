//! Account-creation input rules.

use tickethub_core::config::auth::AuthConfig;
use tickethub_core::error::AppError;

/// Validates registration input against the account-creation rules.
///
/// All violations are collected into a single validation error so the
/// caller sees every problem at once. Email uniqueness and default-role
/// presence are store-level checks and live in the registration service,
/// not here.
#[derive(Debug, Clone)]
pub struct RegistrationValidator {
    /// Minimum password length.
    min_password_length: usize,
}

impl RegistrationValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_password_length: config.password_min_length,
        }
    }

    /// Validates name, email, and password.
    pub fn validate(&self, name: &str, email: &str, password: &str) -> Result<(), AppError> {
        let mut messages = Vec::new();

        if name.trim().is_empty() {
            messages.push("Name is required".to_string());
        }

        if !is_valid_email(email) {
            messages.push("Valid email is required".to_string());
        }

        if password.len() < self.min_password_length {
            messages.push(format!(
                "Password must be at least {} characters",
                self.min_password_length
            ));
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(messages.join("; ")))
        }
    }
}

/// Checks the `local@domain.tld` shape: a local part and a domain part,
/// neither containing whitespace or a second `@`, with a dot somewhere in
/// the domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let part_ok = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    part_ok(local) && part_ok(host) && part_ok(tld)
}
