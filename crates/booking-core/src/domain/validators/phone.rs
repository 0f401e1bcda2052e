use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::ErrorKind;

// `[0-9]` rather than `\d`: the regex crate's `\d` matches any Unicode digit.
static PHONE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{11}$").expect("phone pattern is a valid regex"));

/// Checks the phone number: `+` followed by exactly 11 ASCII digits, with no
/// separators anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneValidator;

impl PhoneValidator {
    pub fn validate(&self, raw: &str) -> Result<(), ErrorKind> {
        let phone = super::required(raw)?;
        if PHONE_FORMAT.is_match(phone) {
            Ok(())
        } else {
            Err(ErrorKind::InvalidPhone)
        }
    }
}
