//! Use-case services.
//!
//! Transports call these instead of a repository directly so that
//! validation, normalization and error translation live in one place.

pub mod listing;
pub mod modifying;

pub use listing::{Listing, MAX_LIST_LIMIT};
pub use modifying::Modifying;

use crate::error::CoreError;
use crate::repository::RepositoryError;

/// Translate a repository error into the domain taxonomy, naming `target`
/// in the not-found and already-exists cases.
fn translate(err: RepositoryError, target: &str) -> CoreError {
    match err {
        RepositoryError::NoRows => CoreError::NotFound(target.to_string()),
        RepositoryError::UniqueViolation => CoreError::AlreadyExists(target.to_string()),
        RepositoryError::Storage(cause) => CoreError::Internal(cause.to_string()),
    }
}
