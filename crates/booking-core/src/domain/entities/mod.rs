pub mod outcome;
pub mod request;

pub use outcome::{FieldError, ValidationOutcome};
pub use request::{BookingRequest, BookingRequestBuilder};
