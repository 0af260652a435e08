//! CLI command definitions and execution.

use clap::{Parser, Subcommand};
use tabled::{Table, Tabled};

use tickethub_auth::password::PasswordHasher;
use tickethub_core::config::AppConfig;
use tickethub_core::error::AppError;
use tickethub_database::repositories::role::RoleRepository;
use tickethub_database::repositories::user::UserRepository;
use tickethub_entity::user::RoleName;
use tickethub_entity::user::model::CreateUser;
use tickethub_service::auth::registration::RegistrationValidator;

/// TicketHub administration CLI.
#[derive(Debug, Parser)]
#[command(name = "tickethub-cli", about = "TicketHub administration commands")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run pending database migrations.
    Migrate,
    /// Create an administrator account. Registration through the API
    /// always assigns the USER role; this is how admins are minted.
    CreateAdmin {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Email address.
        #[arg(long)]
        email: String,
    },
    /// List all user accounts.
    ListUsers,
}

#[derive(Tabled)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: String,
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(&self) -> Result<(), AppError> {
        let env = std::env::var("TICKETHUB_ENV").unwrap_or_else(|_| "development".to_string());
        let config = AppConfig::load(&env)?;
        let pool = tickethub_database::connection::create_pool(&config.database).await?;

        match &self.command {
            Commands::Migrate => {
                tickethub_database::migration::run_migrations(&pool).await?;
                println!("Migrations complete");
                Ok(())
            }
            Commands::CreateAdmin { name, email } => {
                tickethub_database::migration::run_migrations(&pool).await?;

                let password = dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

                RegistrationValidator::new(&config.auth).validate(name, email, &password)?;

                let user_repo = UserRepository::new(pool.clone());
                let role_repo = RoleRepository::new(pool.clone());

                let admin_role = role_repo
                    .find_by_name(RoleName::Admin)
                    .await?
                    .ok_or_else(|| AppError::configuration("ADMIN role not found"))?;

                let password_hash = PasswordHasher::new().hash(&password)?;
                let user = user_repo
                    .create(&CreateUser {
                        name: name.clone(),
                        email: email.clone(),
                        password_hash,
                        role_id: admin_role.id,
                    })
                    .await?;

                println!("Created admin '{}' with id {}", user.email, user.id);
                Ok(())
            }
            Commands::ListUsers => {
                let user_repo = UserRepository::new(pool.clone());
                let users = user_repo.find_all_with_roles().await?;

                let rows: Vec<UserRow> = users
                    .iter()
                    .map(|u| UserRow {
                        id: u.user_id,
                        name: u.name.clone(),
                        email: u.email.clone(),
                        role: u.role.to_string(),
                    })
                    .collect();

                println!("{}", Table::new(rows));
                Ok(())
            }
        }
    }
}
