//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, BookingError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// Every service operation returns this type. The API layer maps each
/// variant onto an HTTP status without inspecting messages.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        DomainError::Persistence {
            message: message.into(),
        }
    }

    /// Whether this error reports a clash with existing state
    /// (overlapping booking, duplicate record, terminal status)
    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::Conflict { .. } | DomainError::Booking(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
