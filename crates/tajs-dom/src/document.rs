use std::fmt;

use crate::{ElementNode, TextContent};

/// A parsed forest: the ordered sequence of top-level elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub elements: Vec<ElementNode>,
}

impl Document {
    pub fn new(elements: Vec<ElementNode>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementNode> {
        self.elements.iter()
    }

    /// Text content of every root, concatenated in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for el in &self.elements {
            el.write_text_content(&mut out);
        }
        out
    }
}

impl IntoIterator for Document {
    type Item = ElementNode;
    type IntoIter = std::vec::IntoIter<ElementNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a ElementNode;
    type IntoIter = std::slice::Iter<'a, ElementNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Roots are serialized back to back, with no separator.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for el in &self.elements {
            fmt::Display::fmt(el, f)?;
        }
        Ok(())
    }
}
