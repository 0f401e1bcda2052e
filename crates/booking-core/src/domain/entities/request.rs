//! The `BookingRequest` input snapshot.

use serde::{Deserialize, Serialize};

/// Raw form input for one validation attempt.
///
/// Fields hold exactly what the user typed; nothing is parsed or trimmed
/// here. A request is built fresh per attempt and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub city: String,
    /// Unparsed `dd.mm.yyyy` text.
    pub date: String,
    pub name: String,
    pub phone: String,
    pub agreement_accepted: bool,
}

impl BookingRequest {
    pub fn builder() -> BookingRequestBuilder {
        BookingRequestBuilder::default()
    }
}

/// Fluent builder for [`BookingRequest`]. Unset fields stay empty.
#[derive(Debug, Default)]
pub struct BookingRequestBuilder {
    inner: BookingRequest,
}

impl BookingRequestBuilder {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.inner.city = city.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.inner.date = date.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.inner.phone = phone.into();
        self
    }

    pub fn agreement(mut self, accepted: bool) -> Self {
        self.inner.agreement_accepted = accepted;
        self
    }

    pub fn build(self) -> BookingRequest {
        self.inner
    }
}
