//! Infrastructure adapters for the booking engine.
//!
//! This crate implements the ports defined in `booking-core::application::ports`.
//! It contains all external dependencies and I/O operations: the system
//! clock and reading city lists from disk.

pub mod builtin_cities;
pub mod catalog;
pub mod clock;

// Re-export commonly used adapters
pub use catalog::{FileCatalog, InMemoryCatalog};
pub use clock::{FixedClock, SystemClock};
