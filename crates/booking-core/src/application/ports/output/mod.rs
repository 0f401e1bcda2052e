//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `booking-adapters` crate provides implementations.

use crate::domain::CalendarDate;
use crate::error::BookingResult;

/// Port for reading "today".
///
/// Implemented by:
/// - `booking_adapters::clock::SystemClock` (production)
/// - `booking_adapters::clock::FixedClock` (testing, replays)
///
/// Only the local calendar date is exposed; time of day never takes part
/// in validation.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}

/// Port for the serviceable-city list.
///
/// Implemented by:
/// - `booking_adapters::catalog::InMemoryCatalog` (built-in or explicit list)
/// - `booking_adapters::catalog::FileCatalog` (TOML or plain text file)
///
/// Read once at startup; the result is frozen into `ValidationRules`.
#[cfg_attr(test, mockall::automock)]
pub trait CityCatalog: Send + Sync {
    /// Canonical city names, in any order. Duplicates are allowed.
    fn cities(&self) -> BookingResult<Vec<String>>;

    /// Human-readable origin of the list, for logs and error messages.
    fn source_name(&self) -> String;
}
