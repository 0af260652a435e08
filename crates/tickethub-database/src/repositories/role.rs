//! Role repository implementation.

use sqlx::PgPool;

use tickethub_core::error::{AppError, ErrorKind};
use tickethub_core::result::AppResult;
use tickethub_entity::user::{Role, RoleName};

/// Repository for role lookups.
///
/// Roles are seeded by migration and read-only at runtime.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a role by its name.
    pub async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find role by name", e)
            })
    }

    /// Find the default role assigned at registration.
    ///
    /// Its absence is a deployment defect, not a user input error; callers
    /// surface it as a configuration failure.
    pub async fn find_default(&self) -> AppResult<Option<Role>> {
        self.find_by_name(RoleName::User).await
    }
}
