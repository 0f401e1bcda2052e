//! In-memory city catalog.

use booking_core::{application::ports::CityCatalog, error::BookingResult};

use crate::builtin_cities;

/// A fixed, in-process city list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryCatalog {
    cities: Vec<String>,
    source_name: String,
}

impl InMemoryCatalog {
    /// Catalog holding exactly `cities`.
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cities: cities.into_iter().map(Into::into).collect(),
            source_name: "inline".into(),
        }
    }

    /// Catalog holding the shipped list of serviceable cities.
    pub fn with_builtin() -> Self {
        Self {
            cities: builtin_cities::all_cities(),
            source_name: "builtin".into(),
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl CityCatalog for InMemoryCatalog {
    fn cities(&self) -> BookingResult<Vec<String>> {
        Ok(self.cities.clone())
    }

    fn source_name(&self) -> String {
        self.source_name.clone()
    }
}
