//! Module with the validator abstraction a mask validator plugs into.
use std::borrow::Cow;

use log::debug;
use thiserror::Error;

/// The error returned by a [ValidatorContext] if a value cannot be converted to text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot convert {kind} to text")]
pub struct TextConversionError {
    /// A short description of the kind of value that could not be converted.
    pub kind: String,
}

impl TextConversionError {
    /// Create a new `TextConversionError`.
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// The capabilities a validator needs from the surrounding validation framework.
///
/// The context knows how to turn the validated value into text and how to build the errors
/// it collects. Validators never inspect the errors they construct.
pub trait ValidatorContext {
    /// The type of the validated values.
    type Value: ?Sized;

    /// The error type the context collects.
    type Error;

    /// Converts the value into text. `Ok(None)` means the value is absent.
    fn convert_to_text<'v>(
        &self,
        value: &'v Self::Value,
    ) -> Result<Option<Cow<'v, str>>, TextConversionError>;

    /// Builds an error with the given message for the value currently being validated.
    fn error(&self, message: String) -> Self::Error;

    /// Builds the error reported when the value is not text.
    fn expected_text_error(&self, conversion_error: &TextConversionError) -> Self::Error {
        debug!("{}", conversion_error);
        self.error("Expected text".to_string())
    }
}

/// A validator checks a value and returns the errors it found, an empty vector if the value is
/// valid.
pub trait Validator {
    /// Validates the value with the help of the context.
    fn validate<C: ValidatorContext>(&self, value: &C::Value, context: &C) -> Vec<C::Error>;
}
