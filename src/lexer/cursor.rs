/// Read position over an immutable source text.
///
/// All lookahead is bounds-checked: reading past the end yields `None`
/// rather than panicking, and the lexer decides how to interpret that.
#[derive(Debug, Clone)]
pub struct Cursor {
    text: Vec<char>,
    position: usize,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Cursor {
            text: source.chars().collect(),
            position: 0,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// True when `position + distance` is past the last character.
    pub fn is_at_end_at(&self, distance: usize) -> bool {
        self.position + distance >= self.text.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, distance: usize) -> Option<char> {
        self.text.get(self.position + distance).copied()
    }

    /// Returns the current character and advances past it.
    ///
    /// Callers check [`Cursor::is_at_end`] first; an exhausted cursor
    /// returns `None` and does not move.
    pub fn consume(&mut self) -> Option<char> {
        let current = self.text.get(self.position).copied()?;
        self.position += 1;
        Some(current)
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn test_peek_does_not_advance() {
        let cursor = Cursor::new("ab");

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_at(1), Some('b'));
        assert_eq!(cursor.peek_at(2), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_consume_walks_to_end() {
        let mut cursor = Cursor::new("xy");

        assert_eq!(cursor.consume(), Some('x'));
        assert!(!cursor.is_at_end());
        assert_eq!(cursor.consume(), Some('y'));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_is_at_end_at_distance() {
        let cursor = Cursor::new("abc");

        assert!(!cursor.is_at_end_at(2));
        assert!(cursor.is_at_end_at(3));
        assert!(Cursor::new("").is_at_end());
    }

    #[test]
    fn test_multibyte_characters_are_single_positions() {
        let mut cursor = Cursor::new("éa");

        assert_eq!(cursor.consume(), Some('é'));
        assert_eq!(cursor.peek(), Some('a'));
    }
}
