//! Appointment date parsing and lead-time check.
//!
//! Steps, in order:
//! 1. empty input is `RequiredField`
//! 2. a strict `dd.mm.yyyy` parse; failures become `InvalidCalendarDate`
//! 3. the day offset from `today` must be at least `min_lead_days`,
//!    otherwise `DateTooSoon` (past dates included)
//!
//! There is no upper bound on how far ahead a date may be.

use crate::domain::value_objects::{CalendarDate, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValidator {
    min_lead_days: i64,
}

impl DateValidator {
    pub const fn new(min_lead_days: i64) -> Self {
        Self { min_lead_days }
    }

    /// `today` is the caller's local calendar date.
    pub fn validate(&self, raw: &str, today: CalendarDate) -> Result<CalendarDate, ErrorKind> {
        let raw = super::required(raw)?;

        let date: CalendarDate = raw
            .parse()
            .map_err(|_| ErrorKind::InvalidCalendarDate)?;

        if date.days_since(&today) < self.min_lead_days {
            return Err(ErrorKind::DateTooSoon);
        }

        Ok(date)
    }
}
