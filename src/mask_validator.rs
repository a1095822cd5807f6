use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::trace;

use crate::{Mask, MaskError, Result, Validator, ValidatorContext};

/// A validator that checks that a value converted to text conforms to a mask.
///
/// The mask is compiled when the validator is created, so a malformed mask is reported once,
/// e.g. when the validators are configured, and never while validating values.
/// A validator can be shared and used for any number of concurrent validations.
///
/// # Example
/// ```rust
/// use maskr::{MaskValidator, TextContext, Validator};
///
/// let validator = MaskValidator::new("99/99/9999").expect("Mask error");
/// let context = TextContext::new("birthday");
/// assert!(validator.validate("24/12/1999", &context).is_empty());
///
/// let errors = validator.validate("24.12.1999", &context);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message, "Invalid character '.' at 2 expected '/'");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaskValidator {
    mask: Mask,
}

impl MaskValidator {
    /// Creates a validator by compiling the given mask string.
    pub fn new(mask: &str) -> Result<Self> {
        Ok(Self {
            mask: Mask::new(mask)?,
        })
    }

    /// Get the compiled mask.
    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}

impl Validator for MaskValidator {
    fn validate<C: ValidatorContext>(&self, value: &C::Value, context: &C) -> Vec<C::Error> {
        let text = match context.convert_to_text(value) {
            Ok(text) => text.unwrap_or_default(),
            Err(e) => return vec![context.expected_text_error(&e)],
        };
        match self.mask.find_mismatch(&text) {
            None => Vec::new(),
            Some(mismatch) => {
                trace!("Mask {} rejects {:?}: {}", self.mask, text, mismatch);
                vec![context.error(mismatch.to_string())]
            }
        }
    }
}

impl From<Mask> for MaskValidator {
    fn from(mask: Mask) -> Self {
        Self { mask }
    }
}

impl FromStr for MaskValidator {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self> {
        MaskValidator::new(s)
    }
}

impl fmt::Display for MaskValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mask {}", self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TextContext, TextConversionError, ValidationError};
    use std::borrow::Cow;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A context over optional integers that only accepts `Some` values below 100 as text.
    struct SmallNumberContext;

    impl ValidatorContext for SmallNumberContext {
        type Value = Option<i64>;
        type Error = String;

        fn convert_to_text<'v>(
            &self,
            value: &'v Option<i64>,
        ) -> std::result::Result<Option<Cow<'v, str>>, TextConversionError> {
            match value {
                Some(n) if *n < 100 => Ok(Some(Cow::Owned(n.to_string()))),
                Some(_) => Err(TextConversionError::new("large number")),
                None => Ok(None),
            }
        }

        fn error(&self, message: String) -> String {
            message
        }
    }

    #[test]
    fn test_validate_text() {
        init();
        let validator = MaskValidator::new("A*9").unwrap();
        let context = TextContext::new("code");
        assert!(validator.validate("BCD8", &context).is_empty());
        assert_eq!(
            validator.validate("BCD", &context),
            vec![ValidationError::new("code", "End of text expected digit")]
        );
    }

    #[test]
    fn test_validate_conversion() {
        init();
        let validator = MaskValidator::new("9+9").unwrap();
        let context = SmallNumberContext;
        assert!(validator.validate(&Some(7), &context).is_empty());
        assert!(validator.validate(&Some(42), &context).is_empty());
        assert_eq!(
            validator.validate(&Some(4200), &context),
            vec!["Expected text".to_string()]
        );
        assert_eq!(
            validator.validate(&None, &context),
            vec!["End of text expected digit".to_string()]
        );
        assert_eq!(
            validator.validate(&Some(-1), &context),
            vec!["Invalid character '-' at 0 expected digit".to_string()]
        );
    }

    #[test]
    fn test_validator_equality_and_display() {
        init();
        let validator: MaskValidator = "\\-9".parse().unwrap();
        assert_eq!(validator, MaskValidator::new("-9").unwrap());
        assert_eq!(validator.to_string(), "mask \\-9");
        assert_eq!(
            MaskValidator::from(Mask::new("9").unwrap()),
            MaskValidator::new("9").unwrap()
        );
        assert!(MaskValidator::new("*").is_err());
    }
}
