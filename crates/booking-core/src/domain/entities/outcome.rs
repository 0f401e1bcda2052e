//! Validation results: `FieldError` and the `ValidationOutcome` union.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    messages,
    value_objects::{CalendarDate, ErrorKind, FieldId},
};

/// Why one field was rejected, with the message to render next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldId,
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(field: FieldId, kind: ErrorKind) -> Self {
        Self {
            field,
            kind,
            message: kind.message(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validating one [`BookingRequest`](super::BookingRequest).
///
/// Invariants:
/// - `Accepted` iff no field failed
/// - `Rejected.errors` is never empty, holds at most one entry per field,
///   and is ordered by [`FieldId`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationOutcome {
    #[serde(rename_all = "camelCase")]
    Accepted { confirmed_date: CalendarDate },
    Rejected { errors: Vec<FieldError> },
}

impl ValidationOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub const fn confirmed_date(&self) -> Option<CalendarDate> {
        match self {
            Self::Accepted { confirmed_date } => Some(*confirmed_date),
            Self::Rejected { .. } => None,
        }
    }

    /// Failing fields in report order; empty when accepted.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted { .. } => &[],
            Self::Rejected { errors } => errors,
        }
    }

    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field == field)
    }

    /// Success notification text, if the booking was accepted.
    pub fn notification(&self) -> Option<String> {
        self.confirmed_date()
            .map(|date| messages::confirmation(&date))
    }
}
