//! Domain-level constants.
//!
//! These constants define the validation rules for user records.

// =============================================================================
// Validation
// =============================================================================

/// Accepted shape of an email address: `local-part@domain.tld`.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Identifier value of a user that has not been persisted yet
pub const UNASSIGNED_ID: i64 = 0;

// =============================================================================
// Messages
// =============================================================================

/// Reported when a required field is missing on create
pub const MSG_NAME_AND_EMAIL_REQUIRED: &str = "Name and email are required";

/// Reported when an identifier is missing
pub const MSG_ID_REQUIRED: &str = "User ID is required";
