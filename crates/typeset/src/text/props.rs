//! Text props: the public surface of the Text primitive.

use std::fmt;
use std::str::FromStr;

use typeset_render::{kebab_case, Responsive, StyleProps, StyleValue};

use super::size::{Size, Variant};
use super::tag::Tag;
use crate::error::ParseEnumError;

/// The accessibility attributes forwarded verbatim to the host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaAttribute {
    Label,
    LabelledBy,
    DescribedBy,
    Controls,
    Expanded,
    HasPopup,
    Hidden,
    Live,
}

impl AriaAttribute {
    /// Every forwarded attribute, in render order.
    pub const ALL: [AriaAttribute; 8] = [
        AriaAttribute::Label,
        AriaAttribute::LabelledBy,
        AriaAttribute::DescribedBy,
        AriaAttribute::Controls,
        AriaAttribute::Expanded,
        AriaAttribute::HasPopup,
        AriaAttribute::Hidden,
        AriaAttribute::Live,
    ];

    /// The HTML attribute name.
    pub fn attribute_name(self) -> &'static str {
        match self {
            AriaAttribute::Label => "aria-label",
            AriaAttribute::LabelledBy => "aria-labelledby",
            AriaAttribute::DescribedBy => "aria-describedby",
            AriaAttribute::Controls => "aria-controls",
            AriaAttribute::Expanded => "aria-expanded",
            AriaAttribute::HasPopup => "aria-haspopup",
            AriaAttribute::Hidden => "aria-hidden",
            AriaAttribute::Live => "aria-live",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AriaAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute_name())
    }
}

impl FromStr for AriaAttribute {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.attribute_name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|a| a.attribute_name()).collect();
                ParseEnumError::new("aria attribute", s, &names)
            })
    }
}

/// Values for the forwarded aria attributes; unset ones are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaAttributes {
    values: [Option<String>; 8],
}

impl AriaAttributes {
    /// Sets an attribute value.
    pub fn set(&mut self, attribute: AriaAttribute, value: impl Into<String>) {
        self.values[attribute.index()] = Some(value.into());
    }

    /// Returns an attribute value.
    pub fn get(&self, attribute: AriaAttribute) -> Option<&str> {
        self.values[attribute.index()].as_deref()
    }

    /// Iterates over set attributes in render order.
    pub fn iter(&self) -> impl Iterator<Item = (AriaAttribute, &str)> {
        AriaAttribute::ALL
            .into_iter()
            .filter_map(move |a| self.get(a).map(|v| (a, v)))
    }
}

/// The raw inline `style` object.
///
/// Passed through to the `style` attribute as given: it is never merged with
/// the computed styles and never resolved against the theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    entries: Vec<(String, StyleValue)>,
}

impl InlineStyle {
    /// Sets a property; an existing property keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes to a `style` attribute value, e.g. `font-weight: bold; top: 4px`.
    pub fn to_attribute(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{}: {}", kebab_case(name), value.to_css(name)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Props of a Text element.
///
/// `tag` (`as`), `size` and `variant` always carry a value; the defaults are
/// `p`, `default` and `default`.
///
/// # Example
///
/// ```rust
/// use typeset::{AriaAttribute, Size, Tag, TextProps, Variant};
///
/// let props = TextProps::new("Saved")
///     .tag(Tag::Span)
///     .size(Size::Small)
///     .variant(Variant::Paragraph)
///     .role("status")
///     .aria(AriaAttribute::Live, "polite")
///     .style_prop("fontWeight", 600);
///
/// assert_eq!(props.tag, Tag::Span);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProps {
    /// Host tag (`as`).
    pub tag: Tag,
    /// Plain or per-breakpoint size.
    pub size: Responsive<Size>,
    /// Row of the `textSizes` table.
    pub variant: Variant,
    pub id: Option<String>,
    pub role: Option<String>,
    /// Extra class names, appended after the computed class.
    pub class_name: Option<String>,
    /// Raw inline style (`style`).
    pub style: InlineStyle,
    /// Custom attributes, applied after the built-in ones.
    pub data_attributes: Vec<(String, String)>,
    pub aria: AriaAttributes,
    /// Caller style props; these win over size-derived styles.
    pub style_props: StyleProps,
    /// Text content.
    pub children: String,
}

impl TextProps {
    /// Creates default props with the given text content.
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
            ..Self::default()
        }
    }

    /// Sets the host tag (`as`).
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    /// Sets the size, plain or responsive.
    pub fn size(mut self, size: impl Into<Responsive<Size>>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets a per-breakpoint size. Use `_` for the base layer.
    pub fn responsive_size<K: Into<String>>(
        mut self,
        sizes: impl IntoIterator<Item = (K, Size)>,
    ) -> Self {
        self.size = Responsive::by_breakpoint(sizes);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Adds a raw inline style property.
    pub fn style(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style.set(name, value);
        self
    }

    /// Adds a custom attribute; a later entry with the same name wins.
    pub fn data_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data_attributes.push((name.into(), value.into()));
        self
    }

    pub fn aria(mut self, attribute: AriaAttribute, value: impl Into<String>) -> Self {
        self.aria.set(attribute, value);
        self
    }

    /// Adds a caller style prop.
    pub fn style_prop(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style_props.set(name, value);
        self
    }

    pub fn children(mut self, children: impl Into<String>) -> Self {
        self.children = children.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = TextProps::default();
        assert_eq!(props.tag, Tag::P);
        assert_eq!(props.size, Responsive::Plain(Size::Default));
        assert_eq!(props.variant, Variant::Default);
        assert!(props.data_attributes.is_empty());
    }

    #[test]
    fn test_aria_iter_in_render_order() {
        let mut aria = AriaAttributes::default();
        aria.set(AriaAttribute::Live, "polite");
        aria.set(AriaAttribute::Label, "Status");
        let names: Vec<_> = aria.iter().map(|(a, _)| a.attribute_name()).collect();
        assert_eq!(names, vec!["aria-label", "aria-live"]);
    }

    #[test]
    fn test_aria_parse() {
        assert_eq!(
            "aria-haspopup".parse::<AriaAttribute>().unwrap(),
            AriaAttribute::HasPopup
        );
        assert!("aria-pressed".parse::<AriaAttribute>().is_err());
    }

    #[test]
    fn test_inline_style_attribute() {
        let mut style = InlineStyle::default();
        style.set("fontWeight", "bold");
        style.set("marginTop", 4);
        style.set("fontWeight", 600);
        assert_eq!(style.to_attribute(), "font-weight: 600; margin-top: 4px");
    }

    #[test]
    fn test_responsive_size_builder() {
        let props = TextProps::new("x").responsive_size([("_", Size::Small), ("medium", Size::Large)]);
        let Responsive::ByBreakpoint(sizes) = &props.size else {
            panic!("expected a per-breakpoint size");
        };
        assert_eq!(sizes.get("medium"), Some(&Size::Large));
    }
}
