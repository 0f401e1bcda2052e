//! Domain value objects: FieldId, ErrorKind, CalendarDate.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! hold no validation policy of their own; the rules live in
//! `validators/`. This file defines the types, their string forms and
//! their parsers.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::messages;

// ── FieldId ──────────────────────────────────────────────────────────────────

/// One input field of the booking form.
///
/// Declaration order is the order in which errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    City,
    Date,
    Name,
    Phone,
    Agreement,
}

impl FieldId {
    /// Every field, in reporting order.
    pub const ALL: [Self; 5] = [
        Self::City,
        Self::Date,
        Self::Name,
        Self::Phone,
        Self::Agreement,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Date => "date",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Agreement => "agreement",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ErrorKind ────────────────────────────────────────────────────────────────

/// Why a single field was rejected.
///
/// A missing consent flag is reported as `RequiredField` on
/// [`FieldId::Agreement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RequiredField,
    InvalidCity,
    InvalidName,
    InvalidPhone,
    DateTooSoon,
    InvalidCalendarDate,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RequiredField => "required_field",
            Self::InvalidCity => "invalid_city",
            Self::InvalidName => "invalid_name",
            Self::InvalidPhone => "invalid_phone",
            Self::DateTooSoon => "date_too_soon",
            Self::InvalidCalendarDate => "invalid_calendar_date",
        }
    }

    /// The catalog message rendered for this kind.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::RequiredField => messages::REQUIRED_FIELD,
            Self::InvalidCity => messages::INVALID_CITY,
            Self::InvalidName => messages::INVALID_NAME,
            Self::InvalidPhone => messages::INVALID_PHONE,
            Self::DateTooSoon => messages::DATE_TOO_SOON,
            Self::InvalidCalendarDate => messages::INVALID_CALENDAR_DATE,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CalendarDate ─────────────────────────────────────────────────────────────

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("date pattern is a valid regex")
});

/// A Gregorian calendar date with no time-of-day component.
///
/// Displayed and parsed as `dd.mm.yyyy`. Parsing is strict: impossible
/// dates such as `30.02.2023` are rejected rather than rolled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Display/parse pattern, in `chrono` strftime syntax.
    pub const FORMAT: &'static str = "%d.%m.%Y";

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Signed number of whole days from `earlier` to `self`.
    pub fn days_since(&self, earlier: &Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// The date `days` days later (or earlier, when negative).
    pub fn plus_days(&self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(Self)
    }

    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || DomainError::UnparsableDate {
            input: s.to_owned(),
        };

        let caps = DATE_SHAPE.captures(s).ok_or_else(unparsable)?;
        let part = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();

        let day: u32 = part(1).parse().map_err(|_| unparsable())?;
        let month: u32 = part(2).parse().map_err(|_| unparsable())?;
        let year: i32 = part(3).parse().map_err(|_| unparsable())?;

        Self::from_ymd(year, month, day).ok_or_else(unparsable)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_follows_form_layout() {
        let mut shuffled = vec![FieldId::Agreement, FieldId::City, FieldId::Phone];
        shuffled.sort();
        assert_eq!(shuffled, vec![FieldId::City, FieldId::Phone, FieldId::Agreement]);
    }

    #[test]
    fn every_kind_has_a_catalog_message() {
        assert_eq!(ErrorKind::RequiredField.message(), messages::REQUIRED_FIELD);
        assert_eq!(ErrorKind::InvalidCity.message(), messages::INVALID_CITY);
        assert_eq!(ErrorKind::InvalidName.message(), messages::INVALID_NAME);
        assert_eq!(ErrorKind::InvalidPhone.message(), messages::INVALID_PHONE);
        assert_eq!(ErrorKind::DateTooSoon.message(), messages::DATE_TOO_SOON);
        assert_eq!(
            ErrorKind::InvalidCalendarDate.message(),
            messages::INVALID_CALENDAR_DATE
        );
    }

    #[test]
    fn parses_day_month_year() {
        let date: CalendarDate = "14.10.2026".parse().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 10, 14));
    }

    #[test]
    fn rejects_impossible_dates_without_rollover() {
        assert!("30.02.2023".parse::<CalendarDate>().is_err());
        assert!("29.02.2023".parse::<CalendarDate>().is_err());
        assert!("31.04.2026".parse::<CalendarDate>().is_err());
        assert!("00.01.2026".parse::<CalendarDate>().is_err());
        assert!("01.13.2026".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn accepts_leap_day_in_leap_year() {
        assert!("29.02.2024".parse::<CalendarDate>().is_ok());
    }

    #[test]
    fn rejects_other_shapes() {
        for raw in ["1.2.2026", "2026-10-14", "14/10/2026", "14.10.26", "14.10.2026 ", "abc"] {
            assert!(raw.parse::<CalendarDate>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn display_is_zero_padded() {
        let date = CalendarDate::from_ymd(2027, 1, 5).unwrap();
        assert_eq!(date.to_string(), "05.01.2027");
    }

    #[test]
    fn day_arithmetic_crosses_month_and_year() {
        let start = CalendarDate::from_ymd(2026, 12, 30).unwrap();
        let later = start.plus_days(3).unwrap();
        assert_eq!(later, CalendarDate::from_ymd(2027, 1, 2).unwrap());
        assert_eq!(later.days_since(&start), 3);
        assert_eq!(start.days_since(&later), -3);
    }

    #[test]
    fn serializes_as_formatted_string() {
        let date = CalendarDate::from_ymd(2026, 10, 20).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"20.10.2026\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
