//! Parse errors with positioned source excerpts.

/// What went wrong. Positions are byte offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("Cannot consume next char: end of input reached")]
    UnexpectedEndOfInput { position: usize },

    #[error("Unexpected char {actual:?} at position {position}; expected {expected:?}")]
    UnexpectedCharacter {
        expected: char,
        actual: char,
        position: usize,
    },

    #[error("Tag name cannot be empty")]
    EmptyTagName { position: usize },

    #[error("Attribute name cannot be empty")]
    EmptyAttributeName { position: usize },

    #[error("Tag name '{opening}' and closing tag name '{closing}' do not match")]
    TagNameMismatch {
        opening: String,
        closing: String,
        position: usize,
    },

    #[error("Elements are nested deeper than {limit} levels")]
    TooDeeplyNested { limit: usize, position: usize },

    #[error("Expected a single root element")]
    MultipleRoots { position: usize },
}

impl ErrorKind {
    pub fn position(&self) -> usize {
        match self {
            ErrorKind::UnexpectedEndOfInput { position }
            | ErrorKind::UnexpectedCharacter { position, .. }
            | ErrorKind::EmptyTagName { position }
            | ErrorKind::EmptyAttributeName { position }
            | ErrorKind::TagNameMismatch { position, .. }
            | ErrorKind::TooDeeplyNested { position, .. }
            | ErrorKind::MultipleRoots { position } => *position,
        }
    }
}

/// Parser error with position information.
///
/// When built against a source string, `message` carries the offending line
/// and a caret under the exact offset:
///
/// ```text
/// Tag name 'foo' and closing tag name 'bar' do not match:
/// <foo></bar>
///        ^
/// ```
///
/// `line` and `column` are 1-based; both are 0 when no source was attached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    /// An error without source context: the message is the kind alone.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            message: kind.to_string(),
            kind,
            line: 0,
            column: 0,
        }
    }

    /// Attach `source`, appending an excerpt of the line containing the
    /// error position and a caret pointing at it.
    pub fn with_source(mut self, source: &str) -> Self {
        let excerpt = Excerpt::locate(source, self.kind.position());
        self.message = format!(
            "{}:\n{}\n{}^",
            self.kind,
            excerpt.text,
            " ".repeat(excerpt.column)
        );
        self.line = excerpt.line;
        self.column = excerpt.column + 1;
        self
    }
}

/// The source line around a position.
struct Excerpt<'a> {
    text: &'a str,
    /// 1-based line number.
    line: usize,
    /// 0-based offset within `text`, in characters.
    column: usize,
}

impl<'a> Excerpt<'a> {
    /// Never panics: out-of-range positions are clamped to the end of the
    /// source and snapped back to a char boundary.
    fn locate(source: &'a str, position: usize) -> Self {
        let mut position = position.min(source.len());
        while !source.is_char_boundary(position) {
            position -= 1;
        }

        let line_start = source[..position].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[position..]
            .find('\n')
            .map_or(source.len(), |i| position + i);

        Self {
            text: source[line_start..line_end].trim_end_matches('\r'),
            line: source[..line_start].matches('\n').count() + 1,
            column: source[line_start..position].chars().count(),
        }
    }
}
