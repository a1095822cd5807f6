//! Module with the component type, the compiled representation of one mask unit.
use std::fmt::{self, Write};

/// One unit of a compiled mask.
///
/// Components are immutable and compared by their structure. The single character classes
/// consume exactly one character, [Component::TextLiteral] consumes its text and the modifiers
/// [Component::Not], [Component::Optional] and [Component::Repeating] wrap another component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Matches any character. Mask syntax `?`.
    AnyChar,
    /// Matches a decimal digit. Mask syntax `9`.
    Digit,
    /// Matches a letter. Mask syntax `A`.
    Letter,
    /// Matches a lower-case letter. Mask syntax `L`.
    LowerLetter,
    /// Matches an upper-case letter. Mask syntax `U`.
    UpperLetter,
    /// Matches exactly the given character. Mask syntax ` `, `-`, `/` or `\c`.
    LiteralChar(char),
    /// Matches the given text character by character. Mask syntax `"text"`.
    TextLiteral(String),
    /// Inverts the single step match of the inner component. Mask syntax `~`.
    Not(Box<Component>),
    /// The inner component may match zero or one time. Mask syntax `+`.
    Optional(Box<Component>),
    /// The inner component may match zero or more times. Mask syntax `*`.
    Repeating(Box<Component>),
}

impl Component {
    /// Wrap the given component in a [Component::Not].
    pub fn negated(inner: Component) -> Self {
        Component::Not(Box::new(inner))
    }

    /// Wrap the given component in a [Component::Optional].
    pub fn optional(inner: Component) -> Self {
        Component::Optional(Box::new(inner))
    }

    /// Wrap the given component in a [Component::Repeating].
    pub fn repeating(inner: Component) -> Self {
        Component::Repeating(Box::new(inner))
    }

    /// The human readable description used in match error messages, e.g. `digit` or
    /// `not 'x'`.
    pub fn description(&self) -> String {
        match self {
            Component::AnyChar => "character".to_string(),
            Component::Digit => "digit".to_string(),
            Component::Letter => "letter".to_string(),
            Component::LowerLetter => "lower-case letter".to_string(),
            Component::UpperLetter => "upper-case letter".to_string(),
            Component::LiteralChar(c) => quote_char(*c),
            Component::TextLiteral(text) => format!("\"{}\"", text.escape_debug()),
            Component::Not(inner) => format!("not {}", inner.description()),
            Component::Optional(inner) => inner.description(),
            Component::Repeating(inner) => format!("many {}", inner.description()),
        }
    }
}

/// Quotes a single character the way it is shown in match error messages.
pub(crate) fn quote_char(c: char) -> String {
    format!("'{}'", c)
}

/// Renders the component in mask syntax.
/// Compiling the rendered text yields a component equal to this one.
impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::AnyChar => f.write_char('?'),
            Component::Digit => f.write_char('9'),
            Component::Letter => f.write_char('A'),
            Component::LowerLetter => f.write_char('L'),
            Component::UpperLetter => f.write_char('U'),
            Component::LiteralChar(c @ (' ' | '-' | '/')) => f.write_char(*c),
            Component::LiteralChar(c) => write!(f, "\\{}", c),
            Component::TextLiteral(text) => {
                f.write_char('"')?;
                for c in text.chars() {
                    if c == '"' || c == '\\' {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('"')
            }
            Component::Not(inner) => write!(f, "~{}", inner),
            Component::Optional(inner) => write!(f, "{}+", inner),
            Component::Repeating(inner) => write!(f, "{}*", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        assert_eq!(Component::AnyChar.description(), "character");
        assert_eq!(Component::LowerLetter.description(), "lower-case letter");
        assert_eq!(Component::LiteralChar('-').description(), "'-'");
        assert_eq!(Component::LiteralChar('\'').description(), "'''");
        assert_eq!(
            Component::TextLiteral("Hi \"you\"".to_string()).description(),
            "\"Hi \\\"you\\\"\""
        );
        assert_eq!(
            Component::negated(Component::Digit).description(),
            "not digit"
        );
        assert_eq!(
            Component::repeating(Component::UpperLetter).description(),
            "many upper-case letter"
        );
    }

    #[test]
    fn test_display_as_mask_syntax() {
        assert_eq!(Component::LiteralChar('/').to_string(), "/");
        assert_eq!(Component::LiteralChar('9').to_string(), "\\9");
        assert_eq!(
            Component::TextLiteral("a\"b\\c".to_string()).to_string(),
            "\"a\\\"b\\\\c\""
        );
        assert_eq!(
            Component::optional(Component::negated(Component::Letter)).to_string(),
            "~A+"
        );
        assert_eq!(
            Component::repeating(Component::TextLiteral("ab".to_string())).to_string(),
            "\"ab\"*"
        );
    }
}
