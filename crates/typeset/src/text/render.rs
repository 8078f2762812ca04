//! The Text renderer.
//!
//! Rendering is a pure function of the props and the ambient theme:
//!
//! 1. resolve the size/variant style object from the theme
//! 2. merge the caller's style props on top (caller wins)
//! 3. turn the merged object into one class name via the stylesheet
//! 4. build the attribute list and render the host element
//!
//! The stylesheet is the only shared state touched, and only to record
//! rules for classes it has not seen yet.

use typeset_render::{AttributeList, Element, MarkupEngine, StyleSheet, Theme};

use super::props::TextProps;
use super::resolve::resolve_size_styles;
use super::tag::Tag;
use crate::error::TextError;
use crate::theme::default_theme;

/// Borrowed collaborators a render pass needs.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub sheet: &'a StyleSheet,
    pub engine: &'a MarkupEngine,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, sheet: &'a StyleSheet, engine: &'a MarkupEngine) -> Self {
        Self {
            theme,
            sheet,
            engine,
        }
    }
}

/// The output of a render: the host element and its HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    tag: Tag,
    class_name: Option<String>,
    attributes: AttributeList,
    content: String,
    html: String,
}

impl RenderedElement {
    /// The host tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The final `class` attribute (computed class, then caller classes).
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Looks up a rendered attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// All rendered attributes, in order.
    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// The unescaped text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The rendered HTML.
    pub fn to_html(&self) -> &str {
        &self.html
    }
}

/// An output slot that receives the rendered element.
///
/// Callers that need to reach the host element after rendering pass one to
/// [`render_text_into`]; every render overwrites the previous element.
#[derive(Debug, Clone, Default)]
pub struct ElementHandle {
    current: Option<RenderedElement>,
}

impl ElementHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered element, if any.
    pub fn current(&self) -> Option<&RenderedElement> {
        self.current.as_ref()
    }

    /// Returns true once a render has filled the handle.
    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }
}

/// Renders Text props to a host element.
///
/// # Errors
///
/// Fails if the theme has no `textSizes` entry for the requested
/// variant/size, if a responsive size names an unknown breakpoint, or if a
/// style value is rejected by the stylesheet.
///
/// # Example
///
/// ```rust
/// use typeset::{render_text, RenderContext, TextProps, default_theme};
/// use typeset_render::{MarkupEngine, StyleSheet};
///
/// let theme = default_theme().unwrap();
/// let sheet = StyleSheet::new();
/// let engine = MarkupEngine::new().unwrap();
/// let ctx = RenderContext::new(theme, &sheet, &engine);
///
/// let element = render_text(&TextProps::new("Hello").class_name("lead"), &ctx).unwrap();
/// assert_eq!(element.tag().as_str(), "p");
/// assert!(element.class_name().unwrap().ends_with(" lead"));
/// ```
pub fn render_text(props: &TextProps, ctx: &RenderContext<'_>) -> Result<RenderedElement, TextError> {
    let size_styles = resolve_size_styles(&props.size, props.variant, ctx.theme)?;
    let caller = props.style_props.expand_shorthands();
    let merged = size_styles.override_with(&caller);
    let computed = ctx.sheet.class_for(&merged, ctx.theme)?;

    let class_name = join_classes(computed.as_deref(), props.class_name.as_deref());

    let mut attributes = AttributeList::new();
    attributes.set_opt("class", class_name.as_deref())?;
    attributes.set_opt("id", props.id.as_deref())?;
    attributes.set_opt("role", props.role.as_deref())?;
    if !props.style.is_empty() {
        attributes.set("style", props.style.to_attribute())?;
    }
    for (attribute, value) in props.aria.iter() {
        attributes.set(attribute.attribute_name(), value)?;
    }
    for (name, value) in &props.data_attributes {
        if let Err(err) = attributes.set(name.as_str(), value.as_str()) {
            log::warn!("skipping custom attribute: {}", err);
        }
    }

    let element = Element::new(props.tag.as_str())
        .with_attributes(attributes)
        .with_content(props.children.as_str());
    let html = ctx.engine.render(&element)?;
    log::trace!("rendered <{}> with class {:?}", props.tag, class_name);

    Ok(RenderedElement {
        tag: props.tag,
        class_name: element.attributes().get("class").map(str::to_string),
        attributes: element.attributes().clone(),
        content: props.children.clone(),
        html,
    })
}

/// Renders Text props and stores the result in `handle`, if given.
pub fn render_text_into(
    props: &TextProps,
    ctx: &RenderContext<'_>,
    handle: Option<&mut ElementHandle>,
) -> Result<RenderedElement, TextError> {
    let element = render_text(props, ctx)?;
    if let Some(handle) = handle {
        handle.current = Some(element.clone());
    }
    Ok(element)
}

fn join_classes(computed: Option<&str>, caller: Option<&str>) -> Option<String> {
    let classes: Vec<&str> = [computed, caller]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    (!classes.is_empty()).then(|| classes.join(" "))
}

impl TextProps {
    /// Renders these props; see [`render_text`].
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderedElement, TextError> {
        render_text(self, ctx)
    }
}

/// Owns a theme, a stylesheet and a markup engine for repeated rendering.
///
/// # Example
///
/// ```rust
/// use typeset::{Size, TextProps, TextRenderer};
///
/// let renderer = TextRenderer::with_default_theme().unwrap();
/// let a = renderer.render(&TextProps::new("One").size(Size::Large)).unwrap();
/// let b = renderer.render(&TextProps::new("Two").size(Size::Large)).unwrap();
///
/// // Same styles, same class.
/// assert_eq!(a.class_name(), b.class_name());
/// assert!(renderer.css().contains("font-size:16px"));
/// ```
#[derive(Debug)]
pub struct TextRenderer {
    theme: Theme,
    sheet: StyleSheet,
    engine: MarkupEngine,
}

impl TextRenderer {
    /// Creates a renderer around a theme.
    pub fn new(theme: Theme) -> Result<Self, TextError> {
        Ok(Self {
            theme,
            sheet: StyleSheet::new(),
            engine: MarkupEngine::new()?,
        })
    }

    /// Creates a renderer around the built-in theme.
    pub fn with_default_theme() -> Result<Self, TextError> {
        Self::new(default_theme()?.clone())
    }

    /// Replaces the stylesheet, e.g. to use a different class prefix.
    pub fn with_sheet(mut self, sheet: StyleSheet) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn stylesheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// A borrowed context for the free render functions.
    pub fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.theme, &self.sheet, &self.engine)
    }

    pub fn render(&self, props: &TextProps) -> Result<RenderedElement, TextError> {
        render_text(props, &self.context())
    }

    pub fn render_into(
        &self,
        props: &TextProps,
        handle: Option<&mut ElementHandle>,
    ) -> Result<RenderedElement, TextError> {
        render_text_into(props, &self.context(), handle)
    }

    /// All CSS generated so far.
    pub fn css(&self) -> String {
        self.sheet.to_css()
    }
}
