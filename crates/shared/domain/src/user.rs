//! User domain entity and related types.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{EMAIL_PATTERN, MSG_ID_REQUIRED, MSG_NAME_AND_EMAIL_REQUIRED, UNASSIGNED_ID};
use crate::error::{DomainError, DomainResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Check an email address against `local-part@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a user identifier has been assigned.
pub fn require_id(id: i64) -> DomainResult<i64> {
    if id == UNASSIGNED_ID {
        return Err(DomainError::invalid_input(MSG_ID_REQUIRED));
    }
    Ok(id)
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object.
///
/// Missing fields deserialize as empty strings and are rejected by
/// [`NewUser::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewUser {
    /// User display name
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// User email address
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Both fields are required and the email must be well formed.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(DomainError::invalid_input(MSG_NAME_AND_EMAIL_REQUIRED));
        }
        if !is_valid_email(&self.email) {
            return Err(DomainError::InvalidEmail);
        }
        Ok(())
    }
}

/// Partial update of an existing user.
///
/// An absent or empty field leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Name to apply, if one was supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Email to apply, if one was supplied.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}
