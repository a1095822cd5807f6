/// A read position in the text being validated.
///
/// The cursor is `Copy`, a saved copy is a checkpoint that can be restored by assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor<'t> {
    text: &'t str,
    // Byte position into `text`
    position: usize,
    // Number of characters consumed so far
    offset: usize,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self {
            text,
            position: 0,
            offset: 0,
        }
    }

    /// The current character, if any.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    /// Moves past the current character.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
            self.offset += 1;
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.position >= self.text.len()
    }

    /// The character index of the current character, used in error messages.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_checkpoint() {
        let mut cursor = Cursor::new("aé1");
        assert_eq!(cursor.peek(), Some('a'));
        cursor.advance();
        let checkpoint = cursor;
        cursor.advance();
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.offset(), 2);
        cursor = checkpoint;
        assert_eq!(cursor.peek(), Some('é'));
        assert_eq!(cursor.offset(), 1);
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_empty());
        assert_eq!(cursor.peek(), None);
        cursor.advance();
        assert_eq!(cursor.offset(), 3);
    }
}
