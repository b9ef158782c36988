//! User Service Library
//!
//! User lifecycle management: validation and orchestration in [`service`],
//! SQL access in [`repository`], connection and schema bootstrap in
//! [`infra`].

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DbErr;
use tracing::info;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Connect to the database and apply migrations when configured to.
///
/// This is the bootstrap step that must complete before [`build_service`].
pub async fn bootstrap(config: &UserServiceConfig) -> Result<Database, DbErr> {
    let db = Database::connect(&config.database).await?;

    if config.auto_migrate {
        db.run_migrations().await?;
        info!("Migrations applied");
    }

    Ok(db)
}

/// Wire the repository and service over an open database.
pub fn build_service(db: &Database) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    Arc::new(UserManager::new(user_repo))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
