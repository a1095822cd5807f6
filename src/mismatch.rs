//! Module with the match-time error type.
use thiserror::Error;

/// Describes why a text does not conform to a mask.
///
/// The matcher stops at the first failure, so there is at most one mismatch per validation.
/// The `Display` output is the diagnostic text reported to users, offsets are character indices
/// starting at 0.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mismatch {
    /// A character was found where the mask expected something else, or where the mask had no
    /// component left.
    #[error("Invalid character '{character}' at {offset}{}", expectation(.expected))]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The character index of the offending character.
        offset: usize,
        /// The description of the expected component, `None` if the mask was exhausted.
        expected: Option<String>,
    },
    /// The text ended while a component still required a character.
    #[error("End of text expected {expected}")]
    EndOfText {
        /// The description of the expected component.
        expected: String,
    },
}

fn expectation(expected: &Option<String>) -> String {
    expected
        .as_ref()
        .map(|e| format!(" expected {}", e))
        .unwrap_or_default()
}
