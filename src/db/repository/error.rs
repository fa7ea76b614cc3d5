//! Error types for repository operations.

use thiserror::Error;

use crate::api::VenueId;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the repository layer and the service functions
/// orchestrating it.
///
/// The pure core (`crate::services`) never produces these; they belong to
/// the stateful boundary around it: lookups, venue management, and
/// booking creation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested venue does not exist.
    #[error("venue not found: {0}")]
    VenueNotFound(VenueId),

    /// Input failed a shape or range check (empty name, inverted date
    /// range, guest count out of bounds).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A booking request collides with an existing reservation.
    #[error("booking conflict: {0}")]
    Conflict(String),

    /// The operation requires a logged-in session.
    #[error("authentication required: {0}")]
    Unauthorized(String),

    /// The session is valid but not allowed to perform this operation.
    #[error("operation not permitted: {0}")]
    Forbidden(String),

    /// Configuration or seed data could not be loaded.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RepositoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        RepositoryError::Validation(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        RepositoryError::Forbidden(message.into())
    }
}
