//! Booking Service - the engine's single entry point.
//!
//! This service coordinates one validation attempt:
//! 1. Read "today" from the injected clock
//! 2. Run the domain [`BookingValidator`]
//! 3. Log the outcome (field names and kinds only, never personal data)
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument, trace};

use crate::{
    application::ports::{CityCatalog, Clock},
    domain::{BookingRequest, BookingValidator, CalendarDate, ValidationOutcome, ValidationRules},
    error::{BookingError, BookingResult},
};

/// Validates booking requests against fixed rules and an injected clock.
///
/// `Send + Sync`: a single instance can serve concurrent requests.
pub struct BookingService {
    validator: BookingValidator,
    clock: Box<dyn Clock>,
}

impl BookingService {
    /// Create a service from already-validated rules.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use booking_core::application::BookingService;
    /// use booking_core::domain::ValidationRules;
    ///
    /// let rules = ValidationRules::new(["Москва"], 2)?;
    /// let service = BookingService::new(rules, clock); // clock: Box<dyn Clock>
    /// ```
    pub fn new(rules: ValidationRules, clock: Box<dyn Clock>) -> Self {
        Self {
            validator: BookingValidator::new(rules),
            clock,
        }
    }

    /// Load the city list from `catalog` and build the rules from it.
    ///
    /// Any catalog or configuration failure is returned here, at startup;
    /// a constructed service never fails per request.
    #[instrument(skip_all, fields(catalog = %catalog.source_name(), min_lead_days = min_lead_days))]
    pub fn from_catalog(
        catalog: &dyn CityCatalog,
        min_lead_days: i64,
        clock: Box<dyn Clock>,
    ) -> BookingResult<Self> {
        let cities = catalog.cities()?;
        let rules = ValidationRules::new(&cities, min_lead_days).map_err(BookingError::Domain)?;

        info!(cities = rules.city_count(), "Validation rules loaded");
        Ok(Self::new(rules, clock))
    }

    /// Validate one request as of the clock's current date.
    #[instrument(skip_all, fields(today))]
    pub fn validate(&self, request: &BookingRequest) -> ValidationOutcome {
        let today = self.clock.today();
        tracing::Span::current().record("today", tracing::field::display(today));

        let outcome = self.validator.validate(request, today);

        match &outcome {
            ValidationOutcome::Accepted { confirmed_date } => {
                debug!(%confirmed_date, "Booking accepted");
            }
            ValidationOutcome::Rejected { errors } => {
                debug!(failed = errors.len(), "Booking rejected");
                for error in errors {
                    trace!(field = %error.field, kind = %error.kind, "Field rejected");
                }
            }
        }

        outcome
    }

    /// `today + days`, as the form's date field expects it.
    pub fn planning_date(&self, days: i64) -> Option<CalendarDate> {
        self.clock.today().plus_days(days)
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    pub fn rules(&self) -> &ValidationRules {
        self.validator.rules()
    }
}
