//! Database connection and initialization.

use std::collections::HashSet;
use std::sync::Arc;

use sea_orm::{
    ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use common::DatabaseConfig;

use super::migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open a connection pool. Migrations are a separate bootstrap step.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            host = %config.host,
            database = %config.name,
            "Database connected"
        );

        Ok(Self::from_connection(connection))
    }

    /// Wrap an existing connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Get a shared handle to the database connection.
    pub fn get_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(self.connection.as_ref(), None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(self.connection.as_ref(), Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(self.connection.as_ref())
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(self.connection.as_ref()).await
    }

    /// Check database connectivity. A disconnected handle is an error.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
