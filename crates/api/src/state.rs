//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::infra::Database;
use user_service_lib::service::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, database: Database) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
