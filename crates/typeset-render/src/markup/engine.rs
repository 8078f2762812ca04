//! Markup engine: renders host elements to HTML.
//!
//! Elements are rendered through a MiniJinja template registered under an
//! `.html` name, so the environment's HTML auto-escaping applies to the tag,
//! every attribute value and the text content.

use minijinja::{context, Environment};

use super::attributes::AttributeList;
use crate::error::RenderError;

const ELEMENT_TEMPLATE_NAME: &str = "element.html";

const ELEMENT_TEMPLATE: &str = "<{{ tag }}\
{% for name, value in attributes %} {{ name }}=\"{{ value }}\"{% endfor %}>\
{{ content }}</{{ tag }}>";

/// A host element ready to be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: AttributeList,
    content: String,
}

impl Element {
    /// Creates an element with no attributes and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: AttributeList::new(),
            content: String::new(),
        }
    }

    /// Replaces the attribute list.
    pub fn with_attributes(mut self, attributes: AttributeList) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets the text content (escaped on render).
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The attributes, in render order.
    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// The unescaped text content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// MiniJinja-backed element renderer.
///
/// # Example
///
/// ```rust
/// use typeset_render::{AttributeList, Element, MarkupEngine};
///
/// let engine = MarkupEngine::new().unwrap();
/// let mut attrs = AttributeList::new();
/// attrs.set("class", "ts-1").unwrap();
///
/// let html = engine
///     .render(&Element::new("span").with_attributes(attrs).with_content("Fish & chips"))
///     .unwrap();
/// assert_eq!(html, r#"<span class="ts-1">Fish &amp; chips</span>"#);
/// ```
pub struct MarkupEngine {
    env: Environment<'static>,
}

impl std::fmt::Debug for MarkupEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupEngine").finish_non_exhaustive()
    }
}

impl MarkupEngine {
    /// Creates an engine with the element template registered.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateError`] if the built-in template fails
    /// to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(ELEMENT_TEMPLATE_NAME, ELEMENT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders an element to an HTML string.
    pub fn render(&self, element: &Element) -> Result<String, RenderError> {
        let template = self.env.get_template(ELEMENT_TEMPLATE_NAME)?;
        let html = template.render(context! {
            tag => element.tag(),
            attributes => element.attributes().entries(),
            content => element.content(),
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bare_element() {
        let engine = MarkupEngine::new().unwrap();
        assert_eq!(engine.render(&Element::new("p")).unwrap(), "<p></p>");
    }

    #[test]
    fn test_render_attributes_in_order() {
        let engine = MarkupEngine::new().unwrap();
        let mut attrs = AttributeList::new();
        attrs.set("id", "a").unwrap();
        attrs.set("role", "note").unwrap();
        let html = engine
            .render(&Element::new("span").with_attributes(attrs).with_content("hi"))
            .unwrap();
        assert_eq!(html, r#"<span id="a" role="note">hi</span>"#);
    }

    #[test]
    fn test_attribute_values_escaped() {
        let engine = MarkupEngine::new().unwrap();
        let mut attrs = AttributeList::new();
        attrs.set("aria-label", "say \"hi\"").unwrap();
        let html = engine.render(&Element::new("em").with_attributes(attrs)).unwrap();
        assert_eq!(html, r#"<em aria-label="say &quot;hi&quot;"></em>"#);
    }

    #[test]
    fn test_content_escaped() {
        let engine = MarkupEngine::new().unwrap();
        let html = engine
            .render(&Element::new("code").with_content("<b>"))
            .unwrap();
        assert_eq!(html, "<code>&lt;b&gt;</code>");
    }
}
