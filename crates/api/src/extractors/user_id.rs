//! User identifier path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;

/// The `:id` path segment, parsed as a 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_input(e.body_text()))?;

        raw.parse::<i64>()
            .map(UserId)
            .map_err(|_| AppError::invalid_input("Invalid user ID"))
    }
}
