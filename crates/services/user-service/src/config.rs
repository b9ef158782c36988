//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Apply pending migrations before the service is constructed
    pub auto_migrate: bool,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            auto_migrate: env::var("AUTO_MIGRATE")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            auto_migrate: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
