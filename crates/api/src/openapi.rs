//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::UpdateUserRequest;
use domain::{NewUser, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(schemas(User, NewUser, UpdateUserRequest)),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
