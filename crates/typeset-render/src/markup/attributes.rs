//! Ordered HTML attribute lists.

use crate::error::RenderError;

/// Returns true if `name` can be written as an HTML attribute name.
///
/// Names must be non-empty and free of whitespace, quotes, `<`, `>`, `/`,
/// `=` and control characters.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// An ordered list of attributes with object-spread override semantics.
///
/// Setting a name that is already present replaces its value but keeps its
/// original position, the same way spreading one object over another does.
///
/// # Example
///
/// ```rust
/// use typeset_render::AttributeList;
///
/// let mut attrs = AttributeList::new();
/// attrs.set("id", "intro").unwrap();
/// attrs.set("role", "note").unwrap();
/// attrs.set("data-testid", "intro-text").unwrap();
/// attrs.set("role", "status").unwrap();
///
/// let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
/// assert_eq!(names, vec!["id", "role", "data-testid"]);
/// assert_eq!(attrs.get("role"), Some("status"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    entries: Vec<(String, String)>,
}

impl AttributeList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing the value in place if already present.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidAttribute`] if the name cannot appear in
    /// markup.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), RenderError> {
        let name = name.into();
        if !is_valid_attribute_name(&name) {
            return Err(RenderError::InvalidAttribute(name));
        }
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
        Ok(())
    }

    /// Sets an attribute only when a value is present.
    pub fn set_opt(&mut self, name: &str, value: Option<&str>) -> Result<(), RenderError> {
        match value {
            Some(v) => self.set(name, v),
            None => Ok(()),
        }
    }

    /// Returns an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(name, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_attribute_name("data-testid"));
        assert!(is_valid_attribute_name("aria-label"));
        assert!(is_valid_attribute_name("x:lang"));
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "a b", "a\"", "a=b", "a>", "on/click", "a\n"] {
            assert!(!is_valid_attribute_name(name), "{:?}", name);
        }
    }

    #[test]
    fn test_set_rejects_invalid_name() {
        let mut attrs = AttributeList::new();
        let err = attrs.set("bad name", "x").unwrap_err();
        assert!(matches!(err, RenderError::InvalidAttribute(_)));
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_set_opt() {
        let mut attrs = AttributeList::new();
        attrs.set_opt("id", None).unwrap();
        attrs.set_opt("role", Some("note")).unwrap();
        assert_eq!(attrs.len(), 1);
        assert!(!attrs.contains("id"));
    }
}
