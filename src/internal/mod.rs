/// Module that provides the character classification of the single character components.
pub(crate) mod char_class;

/// The compiler module turns a mask string into a sequence of components.
mod compiler;
pub(crate) use compiler::compile;

/// Module that provides the cursor over the text being validated.
mod cursor;
pub(crate) use cursor::Cursor;

/// The matcher module matches a text against a sequence of components.
pub(crate) mod matcher;
pub(crate) use matcher::match_text;
