//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::AppResult;
use domain::{NewUser, User, UserChanges};

use crate::extractors::{JsonBody, UserId};
use crate::state::AppState;

/// Partial user update. Absent or empty fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New email address
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
}

impl UpdateUserRequest {
    fn into_changes(self, id: i64) -> UserChanges {
        UserChanges {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing name or email, or malformed body"),
        (status = 422, description = "Invalid email format"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Update user fields
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Merged user record", body = User),
        (status = 400, description = "Malformed user ID or body"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid email format"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_user(payload.into_changes(id))
        .await?;
    Ok(Json(user))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
