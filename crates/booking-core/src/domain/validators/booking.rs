//! The aggregating validator.
//!
//! Runs all five field validators against one request, unconditionally and
//! independently, and folds their results into a [`ValidationOutcome`].
//! There is no short-circuit: an invalid city never hides an invalid phone.

use crate::domain::{
    entities::{BookingRequest, FieldError, ValidationOutcome},
    rules::ValidationRules,
    value_objects::{CalendarDate, FieldId},
};

use super::{AgreementValidator, CityValidator, DateValidator, NameValidator, PhoneValidator};

/// Pure request validator: `(request, today) -> outcome`.
///
/// Holds only immutable [`ValidationRules`], so one instance can be shared
/// across threads and called concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingValidator {
    rules: ValidationRules,
}

impl BookingValidator {
    pub const fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub const fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate every field of `request` against `today`.
    pub fn validate(&self, request: &BookingRequest, today: CalendarDate) -> ValidationOutcome {
        let mut errors = Vec::new();
        let mut reject = |field: FieldId, result: Result<(), crate::domain::ErrorKind>| {
            if let Err(kind) = result {
                errors.push(FieldError::new(field, kind));
            }
        };

        reject(
            FieldId::City,
            CityValidator::new(&self.rules).validate(&request.city).map(drop),
        );

        let date = DateValidator::new(self.rules.min_lead_days()).validate(&request.date, today);
        reject(FieldId::Date, date.map(drop));

        reject(FieldId::Name, NameValidator.validate(&request.name));
        reject(FieldId::Phone, PhoneValidator.validate(&request.phone));
        reject(
            FieldId::Agreement,
            AgreementValidator.validate(request.agreement_accepted),
        );

        match date {
            Ok(confirmed_date) if errors.is_empty() => {
                ValidationOutcome::Accepted { confirmed_date }
            }
            _ => ValidationOutcome::Rejected { errors },
        }
    }
}
