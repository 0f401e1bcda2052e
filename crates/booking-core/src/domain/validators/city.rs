use crate::domain::{rules::ValidationRules, value_objects::ErrorKind};

/// Checks the requested city against the serviceable-city set.
///
/// Matching is exact after trimming: a serviceable city typed in another
/// script or case ("Moscow", "москва") is not serviceable.
#[derive(Debug, Clone, Copy)]
pub struct CityValidator<'a> {
    rules: &'a ValidationRules,
}

impl<'a> CityValidator<'a> {
    pub const fn new(rules: &'a ValidationRules) -> Self {
        Self { rules }
    }

    /// Returns the canonical city name.
    pub fn validate(&self, raw: &str) -> Result<String, ErrorKind> {
        let city = super::required(raw)?;
        if self.rules.is_serviceable(city) {
            Ok(city.to_owned())
        } else {
            Err(ErrorKind::InvalidCity)
        }
    }
}
