use crate::domain::value_objects::ErrorKind;

/// The consent checkbox must be ticked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgreementValidator;

impl AgreementValidator {
    pub fn validate(&self, accepted: bool) -> Result<(), ErrorKind> {
        if accepted {
            Ok(())
        } else {
            Err(ErrorKind::RequiredField)
        }
    }
}
