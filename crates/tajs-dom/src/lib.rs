//! tajs Document Model
//!
//! The tree of typed nodes produced by `tajs-parser`, and the serializer
//! that turns it back into markup. A parse result is a [`Document`]: an
//! ordered forest of root [`ElementNode`]s, each exclusively owning its
//! children.
//!
//! Serialization is the [`std::fmt::Display`] impl of each type, so
//! `node.to_string()` yields the canonical markup.
//!
//! # Example
//!
//! ```
//! use tajs_dom::{ElementNode, Node, TextContent};
//!
//! let mut el = ElementNode::new("p");
//! el.attributes.insert("class", "greeting");
//! el.children.push(Node::text("Hello"));
//!
//! assert_eq!(el.to_string(), r#"<p class="greeting">Hello</p>"#);
//! assert_eq!(el.text_content(), "Hello");
//! ```

pub mod attributes;
pub mod document;
pub mod node;

pub use attributes::Attributes;
pub use document::Document;
pub use node::{ElementNode, Node, TextContent, TextNode};
