//! The mask compiler.
//! A single left-to-right scan over the characters of the mask string, driven by an explicit
//! lexer mode, produces the ordered sequence of components.

use log::{debug, trace};

use crate::{Component, MaskError, MaskErrorKind, Result};

/// The modes of the mask lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexMode {
    Normal,
    BackslashEscape,
    Not,
    NotBackslashEscape,
    InsideQuotes,
    NotInsideQuotes,
    InsideQuotesBackslashEscape,
    NotInsideQuotesBackslashEscape,
}

impl LexMode {
    /// The error for a mask that ends in this mode, if the mode is not a valid end mode.
    fn unfinished(self) -> Option<MaskErrorKind> {
        match self {
            LexMode::Normal => None,
            LexMode::BackslashEscape | LexMode::NotBackslashEscape => {
                Some(MaskErrorKind::BackslashEscapeMissingCharacter)
            }
            LexMode::Not => Some(MaskErrorKind::NotMissingFollowingCharacter),
            LexMode::InsideQuotes
            | LexMode::NotInsideQuotes
            | LexMode::InsideQuotesBackslashEscape
            | LexMode::NotInsideQuotesBackslashEscape => Some(MaskErrorKind::UnclosedDoubleQuotes),
        }
    }
}

/// Maps a control character to its single character component.
fn control_component(c: char) -> Option<Component> {
    match c {
        '?' => Some(Component::AnyChar),
        '9' => Some(Component::Digit),
        'A' => Some(Component::Letter),
        'L' => Some(Component::LowerLetter),
        'U' => Some(Component::UpperLetter),
        ' ' | '-' | '/' => Some(Component::LiteralChar(c)),
        _ => None,
    }
}

/// The state of one compilation run.
struct MaskCompiler {
    mode: LexMode,
    components: Vec<Component>,
    // Buffer of the literal text inside double quotes
    text: String,
}

impl MaskCompiler {
    fn new() -> Self {
        Self {
            mode: LexMode::Normal,
            components: Vec::new(),
            text: String::new(),
        }
    }

    fn set_mode(&mut self, mode: LexMode) {
        trace!("Mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    fn emit(&mut self, component: Component) {
        trace!("Emit {}", component);
        self.components.push(component);
    }

    /// Wraps the most recently emitted component with the given modifier.
    fn modify(&mut self, wrap: fn(Component) -> Component, missing: MaskErrorKind) -> Result<()> {
        let last = self.components.pop().ok_or_else(|| MaskError::new(missing))?;
        self.emit(wrap(last));
        Ok(())
    }

    fn take_text(&mut self) -> Component {
        Component::TextLiteral(std::mem::take(&mut self.text))
    }

    fn step(&mut self, offset: usize, c: char) -> Result<()> {
        match self.mode {
            LexMode::Normal => match c {
                '\\' => self.set_mode(LexMode::BackslashEscape),
                '~' => self.set_mode(LexMode::Not),
                '"' => self.set_mode(LexMode::InsideQuotes),
                '+' => self.modify(Component::optional, MaskErrorKind::OptionalMissingComponent)?,
                '*' => {
                    self.modify(Component::repeating, MaskErrorKind::RepeatingMissingComponent)?
                }
                _ => {
                    let component = control_component(c)
                        .ok_or_else(|| MaskError::new(MaskErrorKind::InvalidCharacter(c, offset)))?;
                    self.emit(component);
                }
            },
            LexMode::BackslashEscape => {
                self.emit(Component::LiteralChar(c));
                self.set_mode(LexMode::Normal);
            }
            LexMode::Not => match c {
                '\\' => self.set_mode(LexMode::NotBackslashEscape),
                '"' => self.set_mode(LexMode::NotInsideQuotes),
                '~' | '+' | '*' => {
                    return Err(MaskError::new(MaskErrorKind::UnsupportedNegation(c, offset)))
                }
                _ => {
                    let component = control_component(c)
                        .ok_or_else(|| MaskError::new(MaskErrorKind::InvalidCharacter(c, offset)))?;
                    self.emit(Component::negated(component));
                    self.set_mode(LexMode::Normal);
                }
            },
            LexMode::NotBackslashEscape => {
                self.emit(Component::negated(Component::LiteralChar(c)));
                self.set_mode(LexMode::Normal);
            }
            LexMode::InsideQuotes | LexMode::NotInsideQuotes => match c {
                '\\' if self.mode == LexMode::InsideQuotes => {
                    self.set_mode(LexMode::InsideQuotesBackslashEscape)
                }
                '\\' => self.set_mode(LexMode::NotInsideQuotesBackslashEscape),
                '"' => {
                    let literal = self.take_text();
                    if self.mode == LexMode::NotInsideQuotes {
                        self.emit(Component::negated(literal));
                    } else {
                        self.emit(literal);
                    }
                    self.set_mode(LexMode::Normal);
                }
                _ => self.text.push(c),
            },
            LexMode::InsideQuotesBackslashEscape => {
                self.text.push(c);
                self.set_mode(LexMode::InsideQuotes);
            }
            LexMode::NotInsideQuotesBackslashEscape => {
                self.text.push(c);
                self.set_mode(LexMode::NotInsideQuotes);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<Component>> {
        match self.mode.unfinished() {
            Some(kind) => Err(MaskError::new(kind)),
            None => Ok(self.components),
        }
    }
}

/// Compiles the mask string into its sequence of components.
/// No partial result is returned if the mask is malformed.
pub(crate) fn compile(mask: &str) -> Result<Vec<Component>> {
    if mask.is_empty() {
        return Err(MaskError::new(MaskErrorKind::Empty));
    }
    let mut compiler = MaskCompiler::new();
    for (offset, c) in mask.chars().enumerate() {
        compiler.step(offset, c)?;
    }
    let components = compiler.finish()?;
    debug!("Compiled mask {:?}: {:?}", mask, components);
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn compile_err(mask: &str) -> MaskErrorKind {
        *compile(mask).unwrap_err().source
    }

    #[test]
    fn test_control_characters() {
        init();
        assert_eq!(
            compile("?9ALU -/").unwrap(),
            vec![
                Component::AnyChar,
                Component::Digit,
                Component::Letter,
                Component::LowerLetter,
                Component::UpperLetter,
                Component::LiteralChar(' '),
                Component::LiteralChar('-'),
                Component::LiteralChar('/'),
            ]
        );
    }

    #[test]
    fn test_backslash_escape() {
        init();
        assert_eq!(
            compile(r"\9\\\~").unwrap(),
            vec![
                Component::LiteralChar('9'),
                Component::LiteralChar('\\'),
                Component::LiteralChar('~'),
            ]
        );
    }

    #[test]
    fn test_quoted_text() {
        init();
        assert_eq!(
            compile(r#""Hello"?"a\"b\\""""#).unwrap(),
            vec![
                Component::TextLiteral("Hello".to_string()),
                Component::AnyChar,
                Component::TextLiteral("a\"b\\".to_string()),
                Component::TextLiteral(String::new()),
            ]
        );
    }

    #[test]
    fn test_not() {
        init();
        assert_eq!(
            compile(r#"~9~\x~"ab""#).unwrap(),
            vec![
                Component::negated(Component::Digit),
                Component::negated(Component::LiteralChar('x')),
                Component::negated(Component::TextLiteral("ab".to_string())),
            ]
        );
    }

    #[test]
    fn test_modifiers() {
        init();
        assert_eq!(
            compile(r#"9+A*~U+"ab"*9+*"#).unwrap(),
            vec![
                Component::optional(Component::Digit),
                Component::repeating(Component::Letter),
                Component::optional(Component::negated(Component::UpperLetter)),
                Component::repeating(Component::TextLiteral("ab".to_string())),
                Component::repeating(Component::optional(Component::Digit)),
            ]
        );
    }

    #[test]
    fn test_compile_errors() {
        init();
        assert_eq!(compile_err(""), MaskErrorKind::Empty);
        assert_eq!(compile_err("+"), MaskErrorKind::OptionalMissingComponent);
        assert_eq!(compile_err("*9"), MaskErrorKind::RepeatingMissingComponent);
        assert_eq!(compile_err("99~"), MaskErrorKind::NotMissingFollowingCharacter);
        assert_eq!(compile_err("9\\"), MaskErrorKind::BackslashEscapeMissingCharacter);
        assert_eq!(compile_err("~\\"), MaskErrorKind::BackslashEscapeMissingCharacter);
        assert_eq!(compile_err("\"abc"), MaskErrorKind::UnclosedDoubleQuotes);
        assert_eq!(compile_err("~\"abc\\"), MaskErrorKind::UnclosedDoubleQuotes);
        assert_eq!(compile_err("99x"), MaskErrorKind::InvalidCharacter('x', 2));
        assert_eq!(compile_err("~b"), MaskErrorKind::InvalidCharacter('b', 1));
        assert_eq!(compile_err("9~~9"), MaskErrorKind::UnsupportedNegation('~', 2));
        assert_eq!(compile_err("~+"), MaskErrorKind::UnsupportedNegation('+', 1));
        assert_eq!(compile_err("~*"), MaskErrorKind::UnsupportedNegation('*', 1));
    }

    #[test]
    fn test_offsets_count_characters() {
        init();
        assert_eq!(
            compile_err("\"ä\"x"),
            MaskErrorKind::InvalidCharacter('x', 3)
        );
    }
}
