//! Application layer: what the engine needs from outside, and the service
//! that puts it together.
//!
//! - `ports`: the `Clock` and `CityCatalog` traits adapters implement
//! - `services`: [`BookingService`], the entry point front ends call
//! - `error`: failures while loading what the rules are built from
//!
//! No validation rule lives here; those are in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{CityCatalog, Clock};
pub use services::BookingService;
