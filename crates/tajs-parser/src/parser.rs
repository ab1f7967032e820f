//! Document parser for tajs markup.
//!
//! Recursive descent straight over a [`Cursor`], with no separate token
//! stream. The grammar:
//!
//! ```text
//! document   := (ws element)+ ws
//! element    := '<' name attrs '>' content '</' name '>'
//! attrs      := (ws name '=' '"' value '"')*
//! content    := (textrun | element)*
//! ```
//!
//! Any failure aborts the whole parse; no partial tree is returned.

use tajs_dom::{Document, ElementNode, Node};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::options::ParseOptions;

/// tajs document parser.
///
/// One parser handles one source string. [`Parser::parse`] is the usual
/// entry point; each call starts from a fresh cursor.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source.
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            depth: 0,
        }
    }

    /// Parse source into a forest of elements using default options.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        Parser::parse_with(source, ParseOptions::default())
    }

    /// Parse source into a forest of elements.
    pub fn parse_with(source: &str, options: ParseOptions) -> Result<Document, ParseError> {
        debug!(len = source.len(), ?options, "parsing document");
        let doc = Parser::new(source, options).parse_document()?;
        debug!(roots = doc.len(), "parsed document");
        Ok(doc)
    }

    /// Parse one or more whitespace-separated elements up to end of input.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut elements = Vec::new();

        loop {
            self.cursor.consume_whitespace();

            if self.options.single_root && !elements.is_empty() {
                return Err(self.error(ErrorKind::MultipleRoots {
                    position: self.cursor.position(),
                }));
            }

            elements.push(self.parse_element()?);
            self.cursor.consume_whitespace();

            if self.cursor.is_at_end() {
                break;
            }
        }

        Ok(Document::new(elements))
    }

    // =========================================================================
    // Elements
    // =========================================================================

    fn parse_element(&mut self) -> Result<ElementNode, ParseError> {
        let start = self.cursor.position();
        if self.depth >= self.options.max_depth {
            return Err(self.error(ErrorKind::TooDeeplyNested {
                limit: self.options.max_depth,
                position: start,
            }));
        }

        self.depth += 1;
        let element = self.parse_element_inner(start);
        self.depth -= 1;
        element
    }

    /// `<name attrs>content</name>`
    fn parse_element_inner(&mut self, start: usize) -> Result<ElementNode, ParseError> {
        self.cursor.expect_char('<')?;

        let tag_name = self.cursor.consume_token();
        if tag_name.is_empty() {
            return Err(self.error(ErrorKind::EmptyTagName {
                position: self.cursor.position(),
            }));
        }

        trace!(tag = tag_name, depth = self.depth, position = start, "open element");
        let mut element = ElementNode::new(tag_name);

        self.parse_attributes(&mut element)?;
        self.cursor.expect_char('>')?;

        self.parse_content(&mut element)?;

        self.cursor.expect_char('<')?;
        self.cursor.expect_char('/')?;

        let closing_start = self.cursor.position();
        let closing = self.cursor.consume_token();
        if closing != tag_name {
            return Err(self.error(ErrorKind::TagNameMismatch {
                opening: tag_name.to_string(),
                closing: closing.to_string(),
                position: closing_start,
            }));
        }

        self.cursor.expect_char('>')?;

        trace!(
            tag = tag_name,
            children = element.children.len(),
            position = self.cursor.position(),
            "close element"
        );
        Ok(element)
    }

    /// `name="value"` pairs up to the closing `>`. A repeated name keeps its
    /// first position and takes the last value.
    fn parse_attributes(&mut self, element: &mut ElementNode) -> Result<(), ParseError> {
        loop {
            self.cursor.consume_whitespace();
            if self.cursor.next_char() == Some('>') {
                return Ok(());
            }

            let name_start = self.cursor.position();
            let name = self.cursor.consume_token();
            // At end of input, let the `=` check below report the truncation
            if name.is_empty() && !self.cursor.is_at_end() {
                return Err(self.error(ErrorKind::EmptyAttributeName {
                    position: name_start,
                }));
            }

            self.cursor.expect_char('=')?;
            self.cursor.expect_char('"')?;
            let value = self.cursor.consume_while(|c| c != '"');
            self.cursor.expect_char('"')?;

            element.attributes.insert(name, value);
        }
    }

    /// Text runs and child elements, in document order, up to `</`.
    fn parse_content(&mut self, element: &mut ElementNode) -> Result<(), ParseError> {
        loop {
            let text = self.cursor.consume_while(|c| c != '<');
            if !text.is_empty() {
                element.children.push(Node::text(text));
            }

            if self.cursor.next_char() == Some('<') && self.cursor.look_ahead(1) != Some('/') {
                let child = self.parse_element()?;
                element.children.push(Node::Element(child));
            } else {
                return Ok(());
            }
        }
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        self.cursor.error(kind)
    }
}
