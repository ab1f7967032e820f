use crate::error::{ErrorKind, ParseError};

/// Whether `c` may appear in a tag or attribute name: ASCII word
/// characters and hyphens.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Whitespace between tags and attributes. Unicode whitespace, plus the
/// byte order mark U+FEFF, minus NEL (U+0085).
pub fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Character-level scanner over a source string.
///
/// `position` is a byte offset that always sits on a char boundary. Every
/// consumed run is returned as a slice of the source, so scanning never
/// allocates.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// The character at the current position, `None` at end of input.
    pub fn next_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// The character `n` places past the current one. `n` below 1 is
    /// treated as 1.
    pub fn look_ahead(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n.max(1))
    }

    /// Consume and return the next character.
    pub fn consume_char(&mut self) -> Result<char, ParseError> {
        match self.next_char() {
            Some(c) => {
                self.pos += c.len_utf8();
                Ok(c)
            }
            None => Err(self.error(ErrorKind::UnexpectedEndOfInput { position: self.pos })),
        }
    }

    /// Consume the next character, failing unless it is `expected`.
    pub fn expect_char(&mut self, expected: char) -> Result<char, ParseError> {
        match self.next_char() {
            Some(actual) if actual != expected => Err(self.error(ErrorKind::UnexpectedCharacter {
                expected,
                actual,
                position: self.pos,
            })),
            _ => self.consume_char(),
        }
    }

    /// Consume characters while `predicate` holds. The run may be empty.
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.next_char() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }

    pub fn consume_whitespace(&mut self) -> &'a str {
        self.consume_while(is_whitespace)
    }

    pub fn consume_token(&mut self) -> &'a str {
        self.consume_while(is_token_char)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Build an error carrying an excerpt of this cursor's source.
    pub fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind).with_source(self.source)
    }
}
