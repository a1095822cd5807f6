//! Module with the compile-time error types.
use thiserror::Error;

/// The result type for the `maskr` crate.
pub type Result<T> = std::result::Result<T, MaskError>;

/// The error type for the `maskr` crate.
/// It is returned when a mask string cannot be compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct MaskError {
    /// The source of the error.
    pub source: Box<MaskErrorKind>,
}

impl MaskError {
    /// Create a new `MaskError`.
    pub fn new(kind: MaskErrorKind) -> Self {
        MaskError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &MaskErrorKind {
        &self.source
    }
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl From<MaskErrorKind> for MaskError {
    fn from(kind: MaskErrorKind) -> Self {
        MaskError::new(kind)
    }
}

/// The error kind type.
/// Offsets are character indices into the mask string, starting at 0.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskErrorKind {
    /// The mask string is empty.
    #[error("Mask is empty")]
    Empty,

    /// A character that is neither a control character nor escaped or quoted.
    #[error("Invalid character '{0}' at {1}")]
    InvalidCharacter(char, usize),

    /// A `+` without a component before it.
    #[error("Optional '+': Missing component before")]
    OptionalMissingComponent,

    /// A `*` without a component before it.
    #[error("Repeating '*': Missing component before")]
    RepeatingMissingComponent,

    /// The mask ends with a `~`.
    #[error("Not missing following character")]
    NotMissingFollowingCharacter,

    /// The mask ends inside a double quoted literal text.
    #[error("Unclosed double quotes")]
    UnclosedDoubleQuotes,

    /// The mask ends with a `\`.
    #[error("Backslash escape missing character")]
    BackslashEscapeMissingCharacter,

    /// A `~` directly followed by a modifier or another `~`.
    #[error("Not '~': Cannot negate '{0}' at {1}")]
    UnsupportedNegation(char, usize),
}
