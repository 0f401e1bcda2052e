use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::ErrorKind;

// Russian alphabet (including Ё/ё), space and hyphen.
static NAME_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[А-Яа-яЁё -]+$").expect("name pattern is a valid regex"));

/// Checks the customer name against the allowed character set.
///
/// Single names, several words and hyphenated surnames all pass; any Latin
/// letter, digit or punctuation other than `-` fails. At least one letter is
/// required, so a lone hyphen is not a name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl NameValidator {
    pub fn validate(&self, raw: &str) -> Result<(), ErrorKind> {
        let name = super::required(raw)?;
        if NAME_CHARSET.is_match(name) && name.chars().any(char::is_alphabetic) {
            Ok(())
        } else {
            Err(ErrorKind::InvalidName)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_russian_names() {
        for name in ["Иван", "Иван Иванов", "Иван Иванов-Петров", "Пётр Ёлкин"] {
            assert_eq!(NameValidator.validate(name), Ok(()), "rejected {name:?}");
        }
    }

    #[test]
    fn rejects_digits() {
        assert_eq!(NameValidator.validate("14567 1564"), Err(ErrorKind::InvalidName));
        assert_eq!(NameValidator.validate("Иван2"), Err(ErrorKind::InvalidName));
    }

    #[test]
    fn rejects_latin_script() {
        assert_eq!(NameValidator.validate("Ivan Ivanov"), Err(ErrorKind::InvalidName));
    }

    #[test]
    fn rejects_mixed_script() {
        // Latin "a" inside an otherwise Cyrillic word.
        assert_eq!(NameValidator.validate("Ив\u{61}н"), Err(ErrorKind::InvalidName));
    }

    #[test]
    fn rejects_punctuation_other_than_hyphen() {
        for name in ["Иван Иванов!", "Иван_Иванов", "Иван, Иванов", "Д'Артаньян"] {
            assert_eq!(
                NameValidator.validate(name),
                Err(ErrorKind::InvalidName),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn separators_alone_are_not_a_name() {
        for name in ["-", "- -", "--"] {
            assert_eq!(
                NameValidator.validate(name),
                Err(ErrorKind::InvalidName),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn non_russian_cyrillic_is_rejected() {
        // Ukrainian "І" is Cyrillic but outside the Russian alphabet.
        assert_eq!(NameValidator.validate("Іван"), Err(ErrorKind::InvalidName));
    }

    #[test]
    fn empty_name_is_required() {
        assert_eq!(NameValidator.validate(""), Err(ErrorKind::RequiredField));
        assert_eq!(NameValidator.validate("  "), Err(ErrorKind::RequiredField));
    }
}
