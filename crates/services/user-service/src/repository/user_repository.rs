//! User repository implementation over a single `users` table.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every operation touches exactly one row identified by primary key. A
/// logical miss is reported in the return value; only storage faults come
/// back as errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the returned record carries the generated id
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Overwrite name and email, advancing `updated_at`.
    /// `None` when no row matched.
    async fn update(&self, user: User) -> AppResult<Option<User>>;

    /// Remove user by ID, returning the number of rows affected
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Current time at the precision PostgreSQL stores.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let now = now();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(new_user.name),
            email: Set(new_user.email),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn update(&self, user: User) -> AppResult<Option<User>> {
        let updated_at = now();
        let changes = ActiveModel {
            id: NotSet,
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            created_at: NotSet,
            updated_at: Set(updated_at),
        };

        let result = UserEntity::update_many()
            .set(changes)
            .filter(user::Column::Id.eq(user.id))
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(User { updated_at, ..user }))
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = UserEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
