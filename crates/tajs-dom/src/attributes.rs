use std::fmt;

use indexmap::IndexMap;

/// Insertion-ordered attribute map of an element.
///
/// Keys are unique. Iteration follows the order in which each key was first
/// inserted; writing an existing key replaces its value without moving it.
/// This is how duplicated attributes in source resolve:
/// `a="1" b="2" a="3"` iterates as `a="3" b="2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// Renders `name="value"` pairs separated by single spaces. Values are
/// emitted verbatim.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}=\"{value}\"")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        let attrs = Attributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.to_string(), "");
    }

    #[test]
    fn test_insertion_order() {
        let attrs: Attributes = [("b", "1"), ("a", "2"), ("c", "3")].into_iter().collect();
        let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.insert("attr1", "val1"), None);
        attrs.insert("attr2", "val2");
        assert_eq!(attrs.insert("attr1", "val3"), Some("val1".to_string()));

        assert_eq!(attrs.len(), 2);
        assert_eq!(
            attrs.iter().collect::<Vec<_>>(),
            vec![("attr1", "val3"), ("attr2", "val2")]
        );
    }

    #[test]
    fn test_display() {
        let attrs: Attributes = [("id", "main"), ("class", "a b")].into_iter().collect();
        assert_eq!(attrs.to_string(), r#"id="main" class="a b""#);
    }

    #[test]
    fn test_lookup() {
        let attrs: Attributes = [("href", "/home")].into_iter().collect();
        assert_eq!(attrs.get("href"), Some("/home"));
        assert_eq!(attrs.get("src"), None);
        assert!(attrs.contains_key("href"));
    }
}
