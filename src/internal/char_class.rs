//! Character classification for the single character components.
//! With the `mask_unicode` feature the Unicode general categories and properties from the
//! `seshat-unicode` crate are used, otherwise the classification methods of `char`.

#[cfg(feature = "mask_unicode")]
use seshat::unicode::{props::Gc, Ucd};

#[cfg(feature = "mask_unicode")]
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    matches!(c.gc(), Gc::Lu | Gc::Ll | Gc::Lt | Gc::Lm | Gc::Lo)
}

#[cfg(feature = "mask_unicode")]
#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    c.gc() == Gc::Nd
}

#[cfg(feature = "mask_unicode")]
#[inline]
pub(crate) fn is_lower_case(c: char) -> bool {
    c.lower()
}

#[cfg(feature = "mask_unicode")]
#[inline]
pub(crate) fn is_upper_case(c: char) -> bool {
    c.upper()
}

#[cfg(not(feature = "mask_unicode"))]
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

#[cfg(not(feature = "mask_unicode"))]
#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    c.is_numeric()
}

#[cfg(not(feature = "mask_unicode"))]
#[inline]
pub(crate) fn is_lower_case(c: char) -> bool {
    c.is_lowercase()
}

#[cfg(not(feature = "mask_unicode"))]
#[inline]
pub(crate) fn is_upper_case(c: char) -> bool {
    c.is_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(is_letter('a'));
        assert!(is_letter('Ä'));
        assert!(!is_letter('1'));
        assert!(!is_letter('_'));
        assert!(is_digit('7'));
        assert!(!is_digit('x'));
        assert!(is_lower_case('ß'));
        assert!(!is_lower_case('B'));
        assert!(is_upper_case('Q'));
        assert!(!is_upper_case('q'));
        assert!(!is_upper_case('-'));
    }

    #[cfg(feature = "mask_unicode")]
    #[test]
    fn test_digit_is_decimal_number_only() {
        // Arabic-Indic digit four is Nd, vulgar fraction one half is No
        assert!(is_digit('\u{0664}'));
        assert!(!is_digit('½'));
    }
}
