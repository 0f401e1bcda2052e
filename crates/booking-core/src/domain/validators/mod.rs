//! Field validators and the aggregating [`BookingValidator`].
//!
//! Each field validator is independent of the others: it sees only its own
//! raw input (plus read-only rules) and returns either the normalized value
//! or the [`ErrorKind`] that rejected it. No validator reads another's
//! result, so the aggregator can run all of them unconditionally.

pub mod agreement;
pub mod booking;
pub mod city;
pub mod date;
pub mod name;
pub mod phone;

pub use agreement::AgreementValidator;
pub use booking::BookingValidator;
pub use city::CityValidator;
pub use date::DateValidator;
pub use name::NameValidator;
pub use phone::PhoneValidator;

use crate::domain::value_objects::ErrorKind;

/// Trim `raw` and reject it with `RequiredField` if nothing is left.
pub(crate) fn required(raw: &str) -> Result<&str, ErrorKind> {
    let value = raw.trim();
    if value.is_empty() {
        Err(ErrorKind::RequiredField)
    } else {
        Ok(value)
    }
}
