//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Database configuration.
///
/// Either a full `DATABASE_URL` or its parts (`DB_HOST`, `DB_PORT`,
/// `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_SSLMODE`).
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Explicit connection URL, takes precedence over the parts below
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    /// libpq TLS mode (`disable`, `require`, ...)
    pub ssl_mode: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "users_db".to_string(),
            ssl_mode: "disable".to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            host: env::var("DB_HOST").unwrap_or(defaults.host),
            port: env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            user: env::var("DB_USER").unwrap_or(defaults.user),
            password: env::var("DB_PASSWORD").unwrap_or(defaults.password),
            name: env::var("DB_NAME").unwrap_or(defaults.name),
            ssl_mode: env::var("DB_SSLMODE").unwrap_or(defaults.ssl_mode),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_connections),
        }
    }

    /// Connection URL for the driver.
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                self.user, self.password, self.host, self.port, self.name, self.ssl_mode
            ),
        }
    }
}
