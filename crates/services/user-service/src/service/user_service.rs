//! User service - validation and orchestration of the user lifecycle.
//!
//! All validation happens here. Every write goes through [`UserRepository`].

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppError, AppResult, OptionExt};
use domain::{is_valid_email, require_id, NewUser, User, UserChanges};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and persist a new user
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Merge non-empty fields onto the stored user and persist.
    /// Returns the authoritative merged record.
    async fn update_user(&self, changes: UserChanges) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        new_user.validate()?;

        let user = self.repo.create(new_user).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        debug!(user_id = id, "Loading user");
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, changes: UserChanges) -> AppResult<User> {
        let id = require_id(changes.id)?;

        let mut current = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if let Some(name) = changes.name() {
            current.name = name.to_string();
        }
        if let Some(email) = changes.email() {
            if !is_valid_email(email) {
                return Err(AppError::InvalidEmail);
            }
            current.email = email.to_string();
        }

        // The row can disappear between the load and the write.
        let user = self.repo.update(current).await?.ok_or_not_found()?;
        info!(user_id = user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        let id = require_id(id)?;

        if self.repo.delete(id).await? == 0 {
            return Err(AppError::UserNotFound);
        }

        info!(user_id = id, "User deleted");
        Ok(())
    }
}
