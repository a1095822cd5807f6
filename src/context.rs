//! Module with ready-made validator contexts and their error type.
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{TextConversionError, ValidatorContext};

/// A validation error, a reference to the validated field together with a message.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// The reference of the validated field.
    pub reference: String,
    /// The human readable message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.reference, self.message)
    }
}

/// A context for validating plain text values of the referenced field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContext {
    reference: String,
}

impl TextContext {
    /// Create a new context for the field with the given reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Get the reference of the validated field.
    #[inline]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl ValidatorContext for TextContext {
    type Value = str;
    type Error = ValidationError;

    fn convert_to_text<'v>(
        &self,
        value: &'v str,
    ) -> Result<Option<Cow<'v, str>>, TextConversionError> {
        Ok(Some(Cow::Borrowed(value)))
    }

    fn error(&self, message: String) -> ValidationError {
        ValidationError::new(self.reference.clone(), message)
    }
}

/// A context for validating JSON values of the referenced field.
///
/// Strings are validated as they are, numbers and booleans by their JSON text and `null` as
/// empty text. Arrays and objects are not text.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonContext {
    reference: String,
}

#[cfg(feature = "serde")]
impl JsonContext {
    /// Create a new context for the field with the given reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Get the reference of the validated field.
    #[inline]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

#[cfg(feature = "serde")]
impl ValidatorContext for JsonContext {
    type Value = serde_json::Value;
    type Error = ValidationError;

    fn convert_to_text<'v>(
        &self,
        value: &'v serde_json::Value,
    ) -> Result<Option<Cow<'v, str>>, TextConversionError> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(Cow::Borrowed(s.as_str()))),
            Value::Number(n) => Ok(Some(Cow::Owned(n.to_string()))),
            Value::Bool(b) => Ok(Some(Cow::Owned(b.to_string()))),
            Value::Array(_) => Err(TextConversionError::new("array")),
            Value::Object(_) => Err(TextConversionError::new("object")),
        }
    }

    fn error(&self, message: String) -> ValidationError {
        ValidationError::new(self.reference.clone(), message)
    }
}
