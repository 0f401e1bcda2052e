//! Immutable validation configuration.
//!
//! [`ValidationRules`] carries the two tunable business parameters: the
//! serviceable-city set and the minimum lead time. It is checked once, at
//! construction, so a misconfiguration fails at startup and never while a
//! request is being validated.

use std::collections::BTreeSet;

use crate::domain::error::DomainError;

/// Earliest bookable offset, in days, from "today".
pub const DEFAULT_MIN_LEAD_DAYS: i64 = 2;

/// Validated, read-only configuration shared by every validation call.
///
/// Invariants:
/// - at least one city
/// - no city name is blank (names are stored trimmed)
/// - `min_lead_days >= 0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    cities: BTreeSet<String>,
    min_lead_days: i64,
}

impl ValidationRules {
    /// Build rules from a city list and a lead time.
    ///
    /// Duplicate cities collapse into one entry.
    pub fn new<I, S>(cities: I, min_lead_days: i64) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if min_lead_days < 0 {
            return Err(DomainError::NegativeLeadTime {
                days: min_lead_days,
            });
        }

        let mut set = BTreeSet::new();
        for (position, city) in cities.into_iter().enumerate() {
            let city = city.as_ref().trim();
            if city.is_empty() {
                return Err(DomainError::BlankCityName { position });
            }
            set.insert(city.to_owned());
        }

        if set.is_empty() {
            return Err(DomainError::EmptyCitySet);
        }

        Ok(Self {
            cities: set,
            min_lead_days,
        })
    }

    pub fn builder() -> ValidationRulesBuilder {
        ValidationRulesBuilder::default()
    }

    /// Case-sensitive membership test against the canonical names.
    pub fn is_serviceable(&self, city: &str) -> bool {
        self.cities.contains(city)
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub const fn min_lead_days(&self) -> i64 {
        self.min_lead_days
    }
}

/// Fluent builder for [`ValidationRules`]; validation happens in `build()`.
#[derive(Debug, Default)]
pub struct ValidationRulesBuilder {
    cities: Vec<String>,
    min_lead_days: Option<i64>,
}

impl ValidationRulesBuilder {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.cities.push(city.into());
        self
    }

    pub fn cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities.extend(cities.into_iter().map(Into::into));
        self
    }

    /// Defaults to [`DEFAULT_MIN_LEAD_DAYS`] when not set.
    pub fn min_lead_days(mut self, days: i64) -> Self {
        self.min_lead_days = Some(days);
        self
    }

    pub fn build(self) -> Result<ValidationRules, DomainError> {
        ValidationRules::new(
            self.cities,
            self.min_lead_days.unwrap_or(DEFAULT_MIN_LEAD_DAYS),
        )
    }
}
