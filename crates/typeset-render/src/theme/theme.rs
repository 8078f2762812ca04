//! Theme struct: the design-system configuration consumed by components.
//!
//! A theme carries the viewport breakpoints, the colour and spacing scales
//! that style values may refer to, and the `textSizes` table that maps a
//! text variant and size to a style object.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use typeset_render::{StyleProps, Theme};
//!
//! let theme = Theme::new()
//!     .with_breakpoint("medium", 768)
//!     .with_color("accent", "#0969da")
//!     .with_space([0, 4, 8, 16])
//!     .with_text_size("default", "default", StyleProps::new().with("fontSize", 14));
//!
//! assert!(theme.text_size("default", "default").is_some());
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use typeset_render::Theme;
//!
//! let theme = Theme::from_yaml(r#"
//! breakpoints:
//!   small: 544
//!   medium: 768
//! textSizes:
//!   default:
//!     default: { fontSize: 14px, lineHeight: 20px }
//! "#).unwrap();
//!
//! assert_eq!(theme.breakpoints().len(), 2);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::parse::{parse_theme, ThemeDocument};
use crate::style::{
    validate_props, validate_value, Breakpoint, StyleProps, StyleValue, StylesheetError,
};

/// Breakpoint keys that address the base layer rather than a media query.
pub const BASE_BREAKPOINT_KEYS: &[&str] = &["_", "base"];

/// Properties whose numeric values index the `space` scale.
const SPACE_PROPERTIES: &[&str] = &[
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "gap",
    "rowGap",
    "columnGap",
];

/// Properties whose keyword values may name a theme colour.
const COLOR_PROPERTIES: &[&str] = &["color", "backgroundColor", "borderColor"];

/// Design-system configuration shared, read-only, by every render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    /// Theme name (optional, typically derived from filename).
    name: Option<String>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
    /// Viewport breakpoints in ascending min-width order.
    breakpoints: Vec<Breakpoint>,
    /// Colour scale (flattened, dotted names).
    colors: BTreeMap<String, String>,
    /// Spacing scale.
    space: Vec<StyleValue>,
    /// Variant name → size name → style object.
    text_sizes: BTreeMap<String, BTreeMap<String, StyleProps>>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Loads a theme from a YAML file.
    ///
    /// The theme name is derived from the filename (without extension).
    /// The source path is stored for [`refresh`](Theme::refresh) support.
    ///
    /// # Errors
    ///
    /// Returns a [`StylesheetError`] if the file cannot be read, parsed or
    /// validated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let content = read_source(path)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        let mut theme = Self::from_yaml(&content).map_err(|e| e.with_path(path.to_path_buf()))?;
        theme.name = name;
        theme.source_path = Some(path.to_path_buf());
        log::debug!("loaded theme {:?} from {}", theme.name, path.display());
        Ok(theme)
    }

    /// Creates a theme from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`StylesheetError`] if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        let theme = Self::from_document(parse_theme(yaml)?);
        theme.validate()?;
        Ok(theme)
    }

    /// Creates a theme from a pre-parsed document, without validation.
    pub fn from_document(doc: ThemeDocument) -> Self {
        Self {
            name: None,
            source_path: None,
            breakpoints: doc.breakpoints,
            colors: doc.colors,
            space: doc.space,
            text_sizes: doc.text_sizes,
        }
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if this theme was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reloads the theme from its source file.
    ///
    /// # Errors
    ///
    /// Returns a [`StylesheetError`] if the theme has no source file, or the
    /// file cannot be read, parsed or validated. On error the theme is left
    /// unchanged.
    pub fn refresh(&mut self) -> Result<(), StylesheetError> {
        let path = self
            .source_path
            .clone()
            .ok_or_else(|| StylesheetError::Load {
                message: "Cannot refresh: theme has no source file".to_string(),
            })?;

        let content = read_source(&path)?;
        let fresh = Self::from_yaml(&content).map_err(|e| e.with_path(path.clone()))?;
        self.breakpoints = fresh.breakpoints;
        self.colors = fresh.colors;
        self.space = fresh.space;
        self.text_sizes = fresh.text_sizes;
        log::debug!("refreshed theme from {}", path.display());
        Ok(())
    }

    /// Adds (or moves) a breakpoint, keeping ascending min-width order.
    pub fn with_breakpoint(mut self, name: impl Into<String>, min_width: u32) -> Self {
        let name = name.into();
        self.breakpoints.retain(|bp| bp.name() != name);
        self.breakpoints.push(Breakpoint::new(name, min_width));
        self.breakpoints.sort_by_key(Breakpoint::min_width);
        self
    }

    /// Adds a named colour.
    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    /// Replaces the spacing scale.
    pub fn with_space<I, V>(mut self, scale: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<StyleValue>,
    {
        self.space = scale.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the `textSizes` entry for a variant and size.
    pub fn with_text_size(
        mut self,
        variant: impl Into<String>,
        size: impl Into<String>,
        props: StyleProps,
    ) -> Self {
        self.text_sizes
            .entry(variant.into())
            .or_default()
            .insert(size.into(), props);
        self
    }

    /// Breakpoints in ascending min-width order.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Looks up a breakpoint by name.
    pub fn breakpoint(&self, name: &str) -> Option<&Breakpoint> {
        self.breakpoints.iter().find(|bp| bp.name() == name)
    }

    /// Looks up a named colour.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// The spacing scale.
    pub fn space(&self) -> &[StyleValue] {
        &self.space
    }

    /// Looks up the `textSizes` entry for a variant and size.
    pub fn text_size(&self, variant: &str, size: &str) -> Option<&StyleProps> {
        self.text_sizes.get(variant).and_then(|row| row.get(size))
    }

    /// The full `textSizes` table.
    pub fn text_sizes(&self) -> &BTreeMap<String, BTreeMap<String, StyleProps>> {
        &self.text_sizes
    }

    /// Replaces scale references with their theme values.
    ///
    /// Integer values of spacing properties index `space`; keyword values of
    /// colour properties name an entry of `colors`. Anything not found in a
    /// scale is kept as is.
    pub fn resolve_scales(&self, props: &StyleProps) -> StyleProps {
        props
            .iter()
            .map(|(name, value)| {
                let resolved = if SPACE_PROPERTIES.contains(&name) {
                    value
                        .as_index()
                        .and_then(|i| self.space.get(i))
                        .cloned()
                        .unwrap_or_else(|| value.clone())
                } else if COLOR_PROPERTIES.contains(&name) {
                    value
                        .as_keyword()
                        .and_then(|k| self.color(k))
                        .map(StyleValue::from)
                        .unwrap_or_else(|| value.clone())
                } else {
                    value.clone()
                };
                (name.to_string(), resolved)
            })
            .collect()
    }

    /// Checks breakpoints and every property name and value in the theme.
    ///
    /// Breakpoint names must be unique, must not be a reserved base key
    /// (`_`, `base`), and min-widths must be strictly ascending in
    /// declaration order.
    pub fn validate(&self) -> Result<(), StylesheetError> {
        let mut previous: Option<&Breakpoint> = None;
        for bp in &self.breakpoints {
            if BASE_BREAKPOINT_KEYS.contains(&bp.name()) {
                return Err(StylesheetError::InvalidBreakpoint {
                    name: bp.name().to_string(),
                    message: "name is reserved for the base layer".to_string(),
                    path: None,
                });
            }
            if let Some(prev) = previous {
                if bp.min_width() <= prev.min_width() {
                    return Err(StylesheetError::InvalidBreakpoint {
                        name: bp.name().to_string(),
                        message: format!(
                            "min-width {}px must be larger than '{}' ({}px)",
                            bp.min_width(),
                            prev.name(),
                            prev.min_width()
                        ),
                        path: None,
                    });
                }
            }
            previous = Some(bp);
        }

        for (name, color) in &self.colors {
            validate_value(name, color)?;
        }
        for value in &self.space {
            if let StyleValue::Keyword(k) = value {
                validate_value("space", k)?;
            }
        }
        for row in self.text_sizes.values() {
            for props in row.values() {
                validate_props(props)?;
            }
        }
        Ok(())
    }

    /// Merges another theme into this one.
    ///
    /// Values from `other` take precedence: breakpoints and colours per name,
    /// `textSizes` per variant and size, and the spacing scale as a whole
    /// when `other` defines one.
    pub fn merge(mut self, other: Theme) -> Self {
        for bp in other.breakpoints {
            self = self.with_breakpoint(bp.name().to_string(), bp.min_width());
        }
        self.colors.extend(other.colors);
        if !other.space.is_empty() {
            self.space = other.space;
        }
        for (variant, row) in other.text_sizes {
            self.text_sizes.entry(variant).or_default().extend(row);
        }
        self
    }
}

fn read_source(path: &Path) -> Result<String, StylesheetError> {
    std::fs::read_to_string(path).map_err(|e| StylesheetError::Load {
        message: format!("Failed to read {}: {}", path.display(), e),
    })
}
