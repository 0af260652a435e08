//! User repository implementation.

use std::str::FromStr;

use sqlx::PgPool;

use tickethub_core::error::{AppError, ErrorKind};
use tickethub_core::result::AppResult;
use tickethub_entity::user::model::CreateUser;
use tickethub_entity::user::{CredentialRecord, RoleName, User};

/// Row shape for credential lookups: a user joined with its role name.
#[derive(Debug, sqlx::FromRow)]
struct CredentialRow {
    user_id: i64,
    name: String,
    email: String,
    password_hash: String,
    role_name: String,
}

impl TryFrom<CredentialRow> for CredentialRecord {
    type Error = AppError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        // A role name outside the known set means the database and the
        // application disagree; reject rather than default.
        let role = RoleName::from_str(&row.role_name).map_err(|e| {
            AppError::new(
                ErrorKind::Configuration,
                format!("User {} has an unrecognized role: {e}", row.user_id),
            )
        })?;

        Ok(CredentialRecord {
            user_id: row.user_id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role,
        })
    }
}

/// Repository for user CRUD and credential lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Find a credential record (user + role name) by email.
    ///
    /// This is the login read path; the record is read-only.
    pub async fn find_credential_by_email(
        &self,
        email: &str,
    ) -> AppResult<Option<CredentialRecord>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT u.id AS user_id, u.name, u.email, u.password_hash, r.name AS role_name \
             FROM users u JOIN roles r ON r.id = u.role_id \
             WHERE LOWER(u.email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find credential by email", e)
        })?;

        row.map(CredentialRecord::try_from).transpose()
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("User already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// List all users joined with their role names, newest first.
    pub async fn find_all_with_roles(&self) -> AppResult<Vec<CredentialRecord>> {
        let rows = sqlx::query_as::<_, CredentialRow>(
            "SELECT u.id AS user_id, u.name, u.email, u.password_hash, r.name AS role_name \
             FROM users u JOIN roles r ON r.id = u.role_id \
             ORDER BY u.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        rows.into_iter().map(CredentialRecord::try_from).collect()
    }

    /// Delete a user by ID.
    pub async fn delete(&self, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
