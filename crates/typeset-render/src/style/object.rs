//! Responsive style objects.

use super::props::StyleProps;

/// A named viewport breakpoint with its minimum width in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breakpoint {
    name: String,
    min_width: u32,
}

impl Breakpoint {
    /// Creates a breakpoint.
    pub fn new(name: impl Into<String>, min_width: u32) -> Self {
        Self {
            name: name.into(),
            min_width,
        }
    }

    /// The breakpoint name, as used in responsive prop mappings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The minimum viewport width at which the breakpoint applies.
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    /// The media query prelude for this breakpoint.
    pub fn media_query(&self) -> String {
        format!("@media (min-width: {}px)", self.min_width)
    }
}

/// A style object with a base layer and per-breakpoint layers.
///
/// Breakpoint layers are kept in ascending `min_width` order, so later
/// layers win at wider viewports, matching mobile-first CSS.
///
/// # Example
///
/// ```rust
/// use typeset_render::{Breakpoint, StyleObject, StyleProps};
///
/// let mut object = StyleObject::from_base(StyleProps::new().with("fontSize", 14));
/// object.add_layer(Breakpoint::new("medium", 768), StyleProps::new().with("fontSize", 16));
///
/// let caller = StyleProps::new().with("fontSize", 20);
/// let object = object.override_with(&caller);
///
/// // Caller keys win at every width.
/// assert_eq!(object.base().get("fontSize"), Some(&20.into()));
/// assert!(object.layers().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    base: StyleProps,
    layers: Vec<(Breakpoint, StyleProps)>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style object with only a base layer.
    pub fn from_base(base: StyleProps) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    /// The layer applied without a media query.
    pub fn base(&self) -> &StyleProps {
        &self.base
    }

    /// Breakpoint layers in ascending `min_width` order.
    pub fn layers(&self) -> &[(Breakpoint, StyleProps)] {
        &self.layers
    }

    /// Returns the layer for a breakpoint name, if any.
    pub fn layer(&self, name: &str) -> Option<&StyleProps> {
        self.layers
            .iter()
            .find(|(bp, _)| bp.name() == name)
            .map(|(_, props)| props)
    }

    /// Merges `props` into the base layer; `props` wins on collision.
    pub fn extend_base(&mut self, props: &StyleProps) {
        self.base.extend(props);
    }

    /// Merges `props` into the layer for `breakpoint`, creating it if needed.
    pub fn add_layer(&mut self, breakpoint: Breakpoint, props: StyleProps) {
        if let Some((_, existing)) = self.layers.iter_mut().find(|(bp, _)| *bp == breakpoint) {
            existing.extend(&props);
            return;
        }
        let at = self
            .layers
            .iter()
            .position(|(bp, _)| bp.min_width() > breakpoint.min_width())
            .unwrap_or(self.layers.len());
        self.layers.insert(at, (breakpoint, props));
    }

    /// Returns a copy where `props` overrides this object everywhere.
    ///
    /// Keys in `props` are merged into the base layer and removed from every
    /// breakpoint layer, so the caller's value is the computed value at all
    /// viewport widths. Layers left empty are dropped.
    pub fn override_with(&self, props: &StyleProps) -> StyleObject {
        let base = self.base.merge(props);
        let layers = self
            .layers
            .iter()
            .filter_map(|(bp, layer)| {
                let mut layer = layer.clone();
                for key in props.keys() {
                    layer.remove(key);
                }
                (!layer.is_empty()).then(|| (bp.clone(), layer))
            })
            .collect();
        StyleObject { base, layers }
    }

    /// Expands shorthand props in every layer.
    pub fn expand_shorthands(&self) -> StyleObject {
        StyleObject {
            base: self.base.expand_shorthands(),
            layers: self
                .layers
                .iter()
                .map(|(bp, props)| (bp.clone(), props.expand_shorthands()))
                .collect(),
        }
    }

    /// Returns true if no layer sets any property.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.layers.iter().all(|(_, p)| p.is_empty())
    }
}

impl From<StyleProps> for StyleObject {
    fn from(base: StyleProps) -> Self {
        StyleObject::from_base(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_stay_sorted() {
        let mut object = StyleObject::new();
        object.add_layer(Breakpoint::new("large", 1012), StyleProps::new().with("a", 3));
        object.add_layer(Breakpoint::new("small", 544), StyleProps::new().with("a", 1));
        object.add_layer(Breakpoint::new("medium", 768), StyleProps::new().with("a", 2));
        let names: Vec<_> = object.layers().iter().map(|(bp, _)| bp.name()).collect();
        assert_eq!(names, vec!["small", "medium", "large"]);
    }

    #[test]
    fn test_add_layer_merges_same_breakpoint() {
        let mut object = StyleObject::new();
        object.add_layer(Breakpoint::new("small", 544), StyleProps::new().with("a", 1));
        object.add_layer(Breakpoint::new("small", 544), StyleProps::new().with("b", 2));
        assert_eq!(object.layers().len(), 1);
        assert_eq!(object.layer("small").map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_override_keeps_unrelated_layer_keys() {
        let mut object = StyleObject::from_base(StyleProps::new().with("fontSize", 14));
        object.add_layer(
            Breakpoint::new("medium", 768),
            StyleProps::new().with("fontSize", 16).with("lineHeight", "24px"),
        );
        let result = object.override_with(&StyleProps::new().with("fontSize", 20));
        assert_eq!(result.base().get("fontSize"), Some(&20.into()));
        let medium = result.layer("medium").unwrap();
        assert!(!medium.contains("fontSize"));
        assert_eq!(medium.get("lineHeight"), Some(&"24px".into()));
    }

    #[test]
    fn test_is_empty() {
        assert!(StyleObject::new().is_empty());
        assert!(!StyleObject::from_base(StyleProps::new().with("a", 1)).is_empty());
    }

    #[test]
    fn test_media_query() {
        assert_eq!(
            Breakpoint::new("small", 544).media_query(),
            "@media (min-width: 544px)"
        );
    }
}
