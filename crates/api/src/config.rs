//! HTTP API configuration.

use std::env;

use user_service_lib::config::UserServiceConfig;

/// HTTP API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database and migration settings for the user service
    pub user_service: UserServiceConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            user_service: UserServiceConfig::from_env(),
        }
    }

    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            user_service: UserServiceConfig::default(),
        }
    }
}
