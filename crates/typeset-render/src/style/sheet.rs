//! The class-name styling hook.
//!
//! [`StyleSheet::class_for`] turns a [`StyleObject`] into a single class
//! name and records the CSS rules behind it. Class names are derived from a
//! hash of the canonical CSS body, so equal style objects always share one
//! class and one set of rules, regardless of which render pass produced them.
//!
//! ```text
//! StyleObject { base: {fontSize: 14}, medium: {fontSize: 16} }
//!
//! .ts-1f0c…{font-size:14px}
//! @media (min-width: 768px){.ts-1f0c…{font-size:16px}}
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use super::css::{is_identifier, validate_props};
use super::error::StylesheetError;
use super::object::StyleObject;
use super::props::StyleProps;
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::class_name_for;

/// Default class-name prefix.
pub const DEFAULT_CLASS_PREFIX: &str = "ts";

#[derive(Debug, Default)]
struct Rules {
    /// Class names in registration order.
    order: Vec<String>,
    /// Class name → CSS text.
    css: HashMap<String, String>,
}

/// Registry of generated classes and their CSS.
///
/// The sheet may be shared between concurrent render passes; registration
/// takes a short write lock and is idempotent.
///
/// # Example
///
/// ```rust
/// use typeset_render::{StyleObject, StyleProps, StyleSheet, Theme};
///
/// let sheet = StyleSheet::new();
/// let object = StyleObject::from_base(StyleProps::new().with("fontSize", 14));
///
/// let class = sheet.class_for(&object, &Theme::new()).unwrap().unwrap();
/// assert!(class.starts_with("ts-"));
/// assert!(sheet.to_css().contains("font-size:14px"));
/// ```
#[derive(Debug)]
pub struct StyleSheet {
    prefix: String,
    rules: RwLock<Rules>,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSheet {
    /// Creates an empty sheet using the default `ts` prefix.
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_CLASS_PREFIX.to_string(),
            rules: RwLock::new(Rules::default()),
        }
    }

    /// Creates an empty sheet whose classes start with `prefix-`.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::InvalidDefinition`] if `prefix` is not a
    /// CSS identifier.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, StylesheetError> {
        let prefix = prefix.into();
        if !is_identifier(&prefix) {
            return Err(StylesheetError::InvalidDefinition {
                section: "prefix".to_string(),
                message: format!("class prefix {:?} is not a CSS identifier", prefix),
                path: None,
            });
        }
        Ok(Self {
            prefix,
            rules: RwLock::new(Rules::default()),
        })
    }

    /// Resolves a style object to a class name, registering its rules.
    ///
    /// Shorthands are expanded and theme scales applied before the CSS is
    /// generated. Returns `Ok(None)` for an object with no properties.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Stylesheet`] if a property name or value fails
    /// validation.
    pub fn class_for(
        &self,
        object: &StyleObject,
        theme: &Theme,
    ) -> Result<Option<String>, RenderError> {
        let expanded = object.expand_shorthands();

        let base = declarations(expanded.base(), theme)?;
        let mut layers = Vec::with_capacity(expanded.layers().len());
        for (breakpoint, props) in expanded.layers() {
            let body = declarations(props, theme)?;
            if !body.is_empty() {
                layers.push((breakpoint.media_query(), body));
            }
        }

        if base.is_empty() && layers.is_empty() {
            return Ok(None);
        }

        let mut canonical = base.clone();
        for (query, body) in &layers {
            canonical.push_str(&format!("|{}{{{}}}", query, body));
        }
        let class = class_name_for(&self.prefix, &canonical);

        if self.contains(&class) {
            return Ok(Some(class));
        }

        let mut css = String::new();
        if !base.is_empty() {
            css.push_str(&format!(".{}{{{}}}", class, base));
        }
        for (query, body) in &layers {
            if !css.is_empty() {
                css.push('\n');
            }
            css.push_str(&format!("{}{{.{}{{{}}}}}", query, class, body));
        }

        let mut rules = self.rules.write().unwrap_or_else(|e| e.into_inner());
        if !rules.css.contains_key(&class) {
            log::debug!("registered style rule {}", class);
            rules.order.push(class.clone());
            rules.css.insert(class.clone(), css);
        }
        Ok(Some(class))
    }

    /// Returns true if a class has been registered.
    pub fn contains(&self, class: &str) -> bool {
        let rules = self.rules.read().unwrap_or_else(|e| e.into_inner());
        rules.css.contains_key(class)
    }

    /// Returns the CSS registered for a class.
    pub fn rule(&self, class: &str) -> Option<String> {
        let rules = self.rules.read().unwrap_or_else(|e| e.into_inner());
        rules.css.get(class).cloned()
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        let rules = self.rules.read().unwrap_or_else(|e| e.into_inner());
        rules.order.len()
    }

    /// Returns true if no class has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Emits every registered rule in registration order.
    pub fn to_css(&self) -> String {
        let rules = self.rules.read().unwrap_or_else(|e| e.into_inner());
        rules
            .order
            .iter()
            .filter_map(|class| rules.css.get(class))
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builds a `name:value;name:value` declaration body.
fn declarations(props: &StyleProps, theme: &Theme) -> Result<String, RenderError> {
    let resolved = theme.resolve_scales(props);
    validate_props(&resolved)?;
    Ok(resolved
        .to_declarations()
        .into_iter()
        .map(|(name, value)| format!("{}:{}", name, value))
        .collect::<Vec<_>>()
        .join(";"))
}
