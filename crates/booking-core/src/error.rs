//! Errors raised while assembling the engine.
//!
//! A rejected booking is never an error: it is a
//! [`ValidationOutcome::Rejected`](crate::domain::ValidationOutcome) value.
//! Everything here happens before the first request is validated.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for booking-core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookingError {
    /// The rules themselves are unusable.
    #[error("Invalid validation rules: {0}")]
    Domain(#[from] DomainError),

    /// An adapter could not supply what the rules are built from.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl BookingError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
        }
    }
}

/// How a front end should classify a [`BookingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A value supplied by the caller is malformed.
    Validation,
    /// A referenced resource (a city list file) is missing.
    NotFound,
    /// Settings are present but unusable.
    Configuration,
}

impl From<crate::domain::ErrorCategory> for ErrorCategory {
    fn from(category: crate::domain::ErrorCategory) -> Self {
        match category {
            crate::domain::ErrorCategory::Validation => Self::Validation,
            crate::domain::ErrorCategory::Configuration => Self::Configuration,
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
