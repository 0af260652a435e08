//! Registration and login orchestration.

use std::sync::Arc;

use tracing::info;

use tickethub_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use tickethub_auth::password::PasswordHasher;
use tickethub_core::error::AppError;
use tickethub_database::repositories::role::RoleRepository;
use tickethub_database::repositories::user::UserRepository;
use tickethub_entity::user::model::CreateUser;
use tickethub_entity::user::{CredentialRecord, User};

use super::registration::RegistrationValidator;

/// Handles account registration and credential login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Role repository.
    role_repo: Arc<RoleRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Registration input rules.
    validator: RegistrationValidator,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        role_repo: Arc<RoleRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        validator: RegistrationValidator,
    ) -> Self {
        Self {
            user_repo,
            role_repo,
            hasher,
            encoder,
            validator,
        }
    }

    /// Registers a new account with the default `USER` role.
    ///
    /// Fails with a validation error for bad input, a conflict for a
    /// duplicate email, and a configuration error when the default role
    /// is not seeded.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        self.validator.validate(name, email, password)?;

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let default_role = self
            .role_repo
            .find_default()
            .await?
            .ok_or_else(|| AppError::configuration("Default role not found"))?;

        let password_hash = self.hasher.hash(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role_id: default_role.id,
            })
            .await?;

        info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email and wrong password collapse into the same error so
    /// the response does not disclose which one failed.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(IssuedToken, CredentialRecord), AppError> {
        let credential = self
            .user_repo
            .find_credential_by_email(email)
            .await?
            .ok_or_else(|| AppError::invalid_credentials("Invalid credentials"))?;

        if !self.hasher.verify(password, &credential.password_hash)? {
            return Err(AppError::invalid_credentials("Invalid credentials"));
        }

        let issued = self.encoder.issue(credential.user_id, credential.role)?;

        info!(user_id = credential.user_id, "User logged in");

        Ok((issued, credential))
    }
}
