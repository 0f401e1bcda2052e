//! Ports the engine is driven through and drives.
//!
//! Only driven (output) ports exist: the engine asks for today's date and
//! for the serviceable cities. Front ends call [`BookingService`] directly.
//!
//! [`BookingService`]: crate::application::BookingService

pub mod output;

pub use output::{CityCatalog, Clock};

#[cfg(test)]
pub use output::{MockCityCatalog, MockClock};
