//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while wiring the engine to its adapters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The city catalog could not be read at all.
    #[error("City catalog '{source_name}' is unavailable: {reason}")]
    CatalogUnavailable { source_name: String, reason: String },

    /// The city catalog was read but its contents are malformed.
    #[error("Failed to parse city catalog {path}: {reason}")]
    CatalogParse { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogUnavailable { source_name, .. } => vec![
                format!("Could not load cities from: {}", source_name),
                "Check that the file exists and is readable".into(),
                "Unset rules.cities_file to use the built-in list".into(),
            ],
            Self::CatalogParse { path, .. } => vec![
                format!("Malformed city list: {}", path.display()),
                "TOML files need a top-level `cities = [\"...\"]` array".into(),
                "Plain text files list one city per line".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogUnavailable { .. } => ErrorCategory::NotFound,
            Self::CatalogParse { .. } => ErrorCategory::Configuration,
        }
    }
}
