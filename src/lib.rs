#![forbid(missing_docs)]
//! # `maskr`
//! The `maskr` crate validates text against compact input masks, as known from input-masking
//! widgets. It is meant to be used as one of several field validators in a validation framework
//! and plugs into it through the [Validator] and [ValidatorContext] traits.
//!
//! A mask is compiled once into a sequence of [Component]s. Validating a value matches the whole
//! text against that sequence and yields at most one error.
//!
//! # Mask syntax
//! | Syntax | Matches |
//! |---|---|
//! | `?` | any character |
//! | `9` | a digit |
//! | `A` | a letter |
//! | `L` | a lower-case letter |
//! | `U` | an upper-case letter |
//! | ` `, `-`, `/` | the character itself |
//! | `\c` | the character `c` itself |
//! | `"text"` | the literal text, `\` escapes `"` and `\` inside the quotes |
//! | `~X` | one step of `X` inverted, e.g. `~9` is any character but a digit |
//! | `X+` | `X` is optional |
//! | `X*` | `X` repeats zero or more times |
//!
//! # Example
//! ```rust
//! use maskr::{MaskValidator, TextContext, Validator};
//!
//! let validator = MaskValidator::new(r#""Hello"?AAA999"#).expect("Mask error");
//! let context = TextContext::new("greeting");
//!
//! assert!(validator.validate("Hello*abc123", &context).is_empty());
//!
//! let errors = validator.validate("Hello*ab1234", &context);
//! assert_eq!(errors[0].to_string(), "greeting: Invalid character '1' at 8 expected letter");
//! ```
//!
//! # Crate features
//! - `mask_unicode`: Enabled by default. Classifies letters, digits and cases with the Unicode
//!   general categories provided by the `seshat-unicode` crate. Without it the classification
//!   methods of `char` are used.
//! - `serde`: Enabled by default. Masks and validators are (de)serialized as their mask string,
//!   and the [JsonContext] validates `serde_json` values.

/// Module that provides the Component type
mod component;
pub use component::Component;

/// Module with ready-made validator contexts
mod context;
#[cfg(feature = "serde")]
pub use context::JsonContext;
pub use context::{TextContext, ValidationError};

/// Module with error definitions
mod errors;
pub use errors::{MaskError, MaskErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// Module that provides the Mask type
mod mask;
pub use mask::Mask;

/// The module with the mask validator.
mod mask_validator;
pub use mask_validator::MaskValidator;

/// Module that provides the Mismatch type
mod mismatch;
pub use mismatch::Mismatch;

/// The module with the validator abstraction.
mod validator;
pub use validator::{TextConversionError, Validator, ValidatorContext};
