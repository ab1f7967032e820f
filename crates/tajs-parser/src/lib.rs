//! tajs Parser
//!
//! Parses tajs markup, a small XML-like dialect, into a [`Document`]
//! forest of typed nodes. Elements carry quoted attributes and interleaved
//! text; there are no comments, self-closing tags, entities or escapes.
//!
//! # Example
//!
//! ```
//! use tajs_parser::Parser;
//! use tajs_dom::TextContent;
//!
//! let doc = Parser::parse(r#"<p class="x">Hello, <b>World</b></p>"#).unwrap();
//! assert_eq!(doc.elements[0].text_content(), "Hello, World");
//! assert_eq!(doc.to_string(), r#"<p class="x">Hello, <b>World</b></p>"#);
//! ```

pub mod cursor;
pub mod error;
pub mod options;
pub mod parser;

pub use cursor::Cursor;
pub use error::{ErrorKind, ParseError};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;
pub use tajs_dom::Document;
