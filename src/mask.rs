//! Module with the compiled mask type.
use std::{fmt, hash::Hash, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    internal::{compile, match_text},
    Component, MaskError, Mismatch, Result,
};

/// A compiled mask.
///
/// The mask keeps the source string it was compiled from for display purposes. Equality and
/// hashing only consider the compiled components, so `"\-"` and `"-"` are equal masks.
/// Once compiled, a mask is never changed and can be shared between threads.
///
/// With the `serde` feature a mask is serialized as its source string. Deserializing compiles
/// the source string.
///
/// # Example
/// ```rust
/// use maskr::Mask;
///
/// let mask = Mask::new(r#""ID-"U*999"#).expect("Mask error");
/// assert!(mask.is_match("ID-AB123"));
/// assert_eq!(
///     mask.find_mismatch("ID-ab123").unwrap().to_string(),
///     "Invalid character 'a' at 3 expected digit"
/// );
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone)]
pub struct Mask {
    source: String,
    components: Vec<Component>,
}

impl Mask {
    /// Compiles the given mask string.
    pub fn new(source: &str) -> Result<Self> {
        Ok(Self {
            source: source.to_string(),
            components: compile(source)?,
        })
    }

    /// Get the mask string this mask was compiled from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the compiled components. There is always at least one.
    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Renders the compiled components back into mask syntax.
    pub fn canonical(&self) -> String {
        self.components.iter().map(ToString::to_string).collect()
    }

    /// Matches the whole text against the mask and returns the first mismatch, if any.
    pub fn find_mismatch(&self, text: &str) -> Option<Mismatch> {
        match_text(&self.components, text).err()
    }

    /// Returns true if the whole text conforms to the mask.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.find_mismatch(text).is_none()
    }
}

impl PartialEq for Mask {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Mask {}

impl Hash for Mask {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self> {
        Mask::new(s)
    }
}

impl TryFrom<&str> for Mask {
    type Error = MaskError;

    fn try_from(source: &str) -> Result<Self> {
        Mask::new(source)
    }
}

impl TryFrom<String> for Mask {
    type Error = MaskError;

    fn try_from(source: String) -> Result<Self> {
        let components = compile(&source)?;
        Ok(Self { source, components })
    }
}

impl From<Mask> for String {
    fn from(mask: Mask) -> Self {
        mask.source
    }
}
