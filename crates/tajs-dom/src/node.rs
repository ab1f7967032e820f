//! Text and element nodes.
//!
//! A tree has no back-references: an [`ElementNode`] owns its children
//! outright, so moving or dropping a root moves or drops the whole subtree.

use std::fmt;

use crate::Attributes;

/// Read/write access to the text carried by a node.
pub trait TextContent {
    /// Append this node's text, depth-first, to `out`.
    fn write_text_content(&self, out: &mut String);

    /// Depth-first concatenation of all text below (and including) this node.
    fn text_content(&self) -> String {
        let mut out = String::new();
        self.write_text_content(&mut out);
        out
    }

    fn set_text_content(&mut self, content: impl Into<String>);
}

/// A node in the tree: either a run of text or an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(TextNode),
    Element(ElementNode),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(TextNode::new(content))
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Node::Text(text)
    }
}

impl From<ElementNode> for Node {
    fn from(el: ElementNode) -> Self {
        Node::Element(el)
    }
}

impl TextContent for Node {
    fn write_text_content(&self, out: &mut String) {
        match self {
            Node::Text(text) => text.write_text_content(out),
            Node::Element(el) => el.write_text_content(out),
        }
    }

    fn set_text_content(&mut self, content: impl Into<String>) {
        match self {
            Node::Text(text) => text.set_text_content(content),
            Node::Element(el) => el.set_text_content(content),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => fmt::Display::fmt(text, f),
            Node::Element(el) => fmt::Display::fmt(el, f),
        }
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// A run of literal text. Serialized verbatim, with no escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    pub content: String,
}

impl TextNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl TextContent for TextNode {
    fn write_text_content(&self, out: &mut String) {
        out.push_str(&self.content);
    }

    fn set_text_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// An element with a tag name, ordered attributes and ordered children.
///
/// Text and child elements interleave in `children` in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    tag_name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl ElementNode {
    /// Create an empty element. The parser rejects empty names before
    /// getting here.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `tag_name` is empty.
    pub fn new(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        debug_assert!(!tag_name.is_empty(), "element tag name must not be empty");
        Self {
            tag_name,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Child elements only, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(Node::as_element)
    }
}

impl TextContent for ElementNode {
    fn write_text_content(&self, out: &mut String) {
        for child in &self.children {
            child.write_text_content(out);
        }
    }

    /// Drops every non-text child, then appends a new text node after the
    /// surviving text children. Existing text children are kept.
    fn set_text_content(&mut self, content: impl Into<String>) {
        self.children.retain(|child| matches!(child, Node::Text(_)));
        self.children.push(Node::text(content));
    }
}

impl fmt::Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag_name)?;
        if !self.attributes.is_empty() {
            write!(f, " {}", self.attributes)?;
        }
        f.write_str(">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag_name)
    }
}
