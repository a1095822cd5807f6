//! The mask matcher.
//! Each component consumes its part of the text and hands the cursor on to its continuation,
//! which is either the rest of the component sequence or the `RepeatEnd` sentinel.

use log::trace;

use super::{char_class, Cursor};
use crate::{component::quote_char, Component, Mismatch};

/// What follows a component while matching.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Continuation<'m> {
    /// The remaining components of the mask.
    Sequence(&'m [Component]),
    /// Always succeeds without consuming anything. Used while probing the inner component of an
    /// optional or repeating component, so that the probe cannot run into the rest of the mask.
    RepeatEnd,
}

impl Continuation<'_> {
    /// Continues matching after a component has consumed its part of the text.
    pub(crate) fn proceed(self, cursor: &mut Cursor<'_>) -> Result<(), Mismatch> {
        match self {
            Continuation::RepeatEnd => Ok(()),
            Continuation::Sequence(components) => match components.split_first() {
                Some((next, rest)) => try_match(next, cursor, false, Continuation::Sequence(rest)),
                None if cursor.is_empty() => Ok(()),
                None => Err(Mismatch::InvalidCharacter {
                    character: cursor.peek().unwrap_or_default(),
                    offset: cursor.offset(),
                    expected: None,
                }),
            },
        }
    }
}

/// Matches the whole text against the component sequence.
pub(crate) fn match_text(components: &[Component], text: &str) -> Result<(), Mismatch> {
    let mut cursor = Cursor::new(text);
    Continuation::Sequence(components).proceed(&mut cursor)
}

/// Tries to match `component` at the cursor position and, on success, the continuation.
/// `invert` negates the single step predicate of character classes and literal text.
pub(crate) fn try_match(
    component: &Component,
    cursor: &mut Cursor<'_>,
    invert: bool,
    next: Continuation<'_>,
) -> Result<(), Mismatch> {
    trace!(
        "Try {}{} at {}",
        if invert { "~" } else { "" },
        component,
        cursor.offset()
    );
    match component {
        Component::AnyChar => match_char(cursor, invert, |_| true, component, next),
        Component::Digit => match_char(cursor, invert, char_class::is_digit, component, next),
        Component::Letter => match_char(cursor, invert, char_class::is_letter, component, next),
        Component::LowerLetter => {
            match_char(cursor, invert, char_class::is_lower_case, component, next)
        }
        Component::UpperLetter => {
            match_char(cursor, invert, char_class::is_upper_case, component, next)
        }
        Component::LiteralChar(l) => match_char(cursor, invert, |c| c == *l, component, next),
        Component::TextLiteral(text) => {
            for l in text.chars() {
                step(cursor, invert, |c| c == l, || quote_char(l))?;
            }
            next.proceed(cursor)
        }
        Component::Not(inner) => try_match(inner, cursor, !invert, next),
        Component::Optional(inner) => match_optional(inner, cursor, invert, next),
        Component::Repeating(inner) => match_repeating(inner, cursor, invert, next),
    }
}

fn match_char(
    cursor: &mut Cursor<'_>,
    invert: bool,
    predicate: impl Fn(char) -> bool,
    component: &Component,
    next: Continuation<'_>,
) -> Result<(), Mismatch> {
    step(cursor, invert, predicate, || component.description())?;
    next.proceed(cursor)
}

/// Consumes one character if the (possibly inverted) predicate holds for it.
fn step(
    cursor: &mut Cursor<'_>,
    invert: bool,
    predicate: impl Fn(char) -> bool,
    description: impl Fn() -> String,
) -> Result<(), Mismatch> {
    let expected = || {
        if invert {
            format!("not {}", description())
        } else {
            description()
        }
    };
    match cursor.peek() {
        None => Err(Mismatch::EndOfText {
            expected: expected(),
        }),
        Some(c) if predicate(c) != invert => {
            cursor.advance();
            Ok(())
        }
        Some(c) => Err(Mismatch::InvalidCharacter {
            character: c,
            offset: cursor.offset(),
            expected: Some(expected()),
        }),
    }
}

/// The inner component is probed once. If it matches, matching goes on from the probe's cursor
/// and only if that fails, from the checkpoint with the component absent.
fn match_optional(
    inner: &Component,
    cursor: &mut Cursor<'_>,
    invert: bool,
    next: Continuation<'_>,
) -> Result<(), Mismatch> {
    let checkpoint = *cursor;
    if try_match(inner, cursor, invert, Continuation::RepeatEnd).is_ok() {
        let present = match next.proceed(cursor) {
            Ok(()) => return Ok(()),
            Err(mismatch) => mismatch,
        };
        trace!("Optional {} absent at {}", inner, checkpoint.offset());
        *cursor = checkpoint;
        return next.proceed(cursor).map_err(|_| present);
    }
    *cursor = checkpoint;
    next.proceed(cursor)
}

/// The inner component is repeated as often as it matches. Each repetition is probed from a
/// checkpoint, a failed probe restores it and ends the loop. Matching then commits to the
/// greediest repetition and goes on with the continuation.
fn match_repeating(
    inner: &Component,
    cursor: &mut Cursor<'_>,
    invert: bool,
    next: Continuation<'_>,
) -> Result<(), Mismatch> {
    let start = cursor.offset();
    loop {
        let checkpoint = *cursor;
        match try_match(inner, cursor, invert, Continuation::RepeatEnd) {
            // A repetition that consumes nothing would repeat forever.
            Ok(()) if cursor.offset() > checkpoint.offset() => {}
            _ => {
                *cursor = checkpoint;
                break;
            }
        }
    }
    trace!("Repeating {} from {} to {}", inner, start, cursor.offset());
    next.proceed(cursor)
}
