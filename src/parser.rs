// src/parser.rs
use std::num::ParseIntError;

/// Byte cursor over a path expression.
///
/// Every delimiter the path grammar cares about is ASCII, so slicing the
/// source at a delimiter position always lands on a char boundary.
pub struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Consume bytes up to (not including) the first byte in `stops`.
    pub fn take_until(&mut self, stops: &[u8]) -> &'a str {
        let start = self.i;
        while let Some(b) = self.peek() {
            if stops.contains(&b) {
                break;
            }
            self.i += 1;
        }
        &self.s[start..self.i]
    }

    /// Read an optionally signed decimal integer.
    ///
    /// Returns `None` when nothing integer-like is present, so an omitted
    /// bound can be told apart from a literal `0`.
    pub fn read_int(&mut self) -> Option<Result<i64, ParseIntError>> {
        let start = self.i;
        self.consume(b'-');
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.i += 1;
        }
        if self.i == start {
            return None;
        }
        Some(self.s[start..self.i].parse::<i64>())
    }

    pub fn consume(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    pub fn peek_str(&self, lit: &str) -> bool {
        self.s[self.i..].starts_with(lit)
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn take_until_stops_at_delimiters() {
        let mut p = Parser::new("store.book[0]");
        assert_eq!(p.take_until(b".[("), "store");
        assert!(p.consume(b'.'));
        assert_eq!(p.take_until(b".[("), "book");
        assert_eq!(p.rest(), "[0]");
    }

    #[test]
    fn read_int_distinguishes_absent_from_zero() {
        assert_eq!(Parser::new("]").read_int(), None);
        assert_eq!(Parser::new("0]").read_int(), Some(Ok(0)));
        assert_eq!(Parser::new("-12:").read_int(), Some(Ok(-12)));
        assert!(Parser::new("-]").read_int().unwrap().is_err());
        assert!(Parser::new("99999999999999999999]").read_int().unwrap().is_err());
    }
}
