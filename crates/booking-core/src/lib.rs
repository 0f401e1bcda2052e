//! Booking Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of the
//! home-delivery appointment booking validator, following hexagonal (ports
//! and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          booking-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (BookingService)             │
//! │       Reads the clock, validates        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Clock, CityCatalog)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    booking-adapters (Infrastructure)    │
//! │ (SystemClock, FixedClock, FileCatalog)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (BookingValidator, field validators,    │
//! │  ValidationRules, ValidationOutcome)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use booking_core::domain::{
//!     BookingRequest, BookingValidator, CalendarDate, ValidationRules,
//! };
//!
//! let rules = ValidationRules::new(["Санкт-Петербург"], 2).unwrap();
//! let validator = BookingValidator::new(rules);
//!
//! let today = CalendarDate::from_ymd(2026, 10, 14).unwrap();
//! let request = BookingRequest::builder()
//!     .city("Санкт-Петербург")
//!     .date("20.10.2026")
//!     .name("Иван Иванов-Петров")
//!     .phone("+79998887766")
//!     .agreement(true)
//!     .build();
//!
//! let outcome = validator.validate(&request, today);
//! assert_eq!(
//!     outcome.notification().as_deref(),
//!     Some("Встреча успешно забронирована на 20.10.2026"),
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BookingService,
        ports::{CityCatalog, Clock},
    };
    pub use crate::domain::{
        BookingRequest, BookingValidator, CalendarDate, DEFAULT_MIN_LEAD_DAYS, ErrorKind,
        FieldError, FieldId, ValidationOutcome, ValidationRules,
    };
    pub use crate::error::{BookingError, BookingResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
