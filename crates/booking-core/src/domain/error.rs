// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================
//
// Field-level rejections are NOT errors; they travel as `FieldError` data
// inside `ValidationOutcome::Rejected`. The variants below cover
// misconfiguration and unparsable values that a validator converts into a
// field error before anything leaves the domain.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so configuration failures can be reported more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("serviceable city set is empty")]
    EmptyCitySet,

    #[error("serviceable city list contains a blank entry at position {position}")]
    BlankCityName { position: usize },

    #[error("minimum lead time must not be negative, got {days} day(s)")]
    NegativeLeadTime { days: i64 },

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("'{input}' is not a valid dd.mm.yyyy calendar date")]
    UnparsableDate { input: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyCitySet => vec![
                "Provide at least one serviceable city".into(),
                "Remove `rules.cities_file` to fall back to the built-in list".into(),
            ],
            Self::BlankCityName { position } => vec![
                format!("Entry #{} of the city list is empty", position + 1),
                "Remove blank entries from the city list".into(),
            ],
            Self::NegativeLeadTime { days } => vec![
                format!("{days} is not a valid lead time"),
                "Use 0 or a positive number of days".into(),
            ],
            Self::UnparsableDate { .. } => vec![
                "Dates are written as dd.mm.yyyy, e.g. 21.10.2026".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyCitySet | Self::BlankCityName { .. } | Self::NegativeLeadTime { .. } => {
                ErrorCategory::Configuration
            }
            Self::UnparsableDate { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_categorized() {
        assert_eq!(DomainError::EmptyCitySet.category(), ErrorCategory::Configuration);
        assert_eq!(
            DomainError::NegativeLeadTime { days: -1 }.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            DomainError::UnparsableDate { input: "1.1.2026".into() }.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn blank_city_suggestion_is_one_based() {
        let err = DomainError::BlankCityName { position: 2 };
        assert!(err.suggestions().iter().any(|s| s.contains("#3")));
    }
}
