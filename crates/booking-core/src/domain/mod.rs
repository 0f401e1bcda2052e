// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer: the booking validation rules.
//!
//! This module contains pure business logic.
//! Time and city data reach it as plain values; reading the clock and
//! loading city lists are handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, clock or logging calls
//! - **Immutable values**: Requests, rules and outcomes are Clone + PartialEq
//! - **Failures as data**: a rejected field is a `FieldError`, not an `Err`
//!
pub mod entities;
pub mod error;
pub mod messages;
pub mod rules;
pub mod validators;
pub mod value_objects;

pub use entities::{BookingRequest, BookingRequestBuilder, FieldError, ValidationOutcome};
pub use error::{DomainError, ErrorCategory};
pub use rules::{DEFAULT_MIN_LEAD_DAYS, ValidationRules, ValidationRulesBuilder};
pub use validators::{
    AgreementValidator, BookingValidator, CityValidator, DateValidator, NameValidator,
    PhoneValidator,
};
pub use value_objects::{CalendarDate, ErrorKind, FieldId};
