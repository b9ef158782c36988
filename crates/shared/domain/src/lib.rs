//! Domain layer - Core business entities and validation rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{is_valid_email, require_id, NewUser, User, UserChanges};
