//! Responsive props: values that vary by viewport breakpoint.
//!
//! A responsive prop is either a single value or a mapping from breakpoint
//! name to value. [`expand_responsive`] turns either form into a
//! [`StyleObject`] by mapping every value through a caller-supplied function.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::style::{StyleObject, StyleProps};
use crate::theme::{Theme, BASE_BREAKPOINT_KEYS};

/// A value that is either plain or given per breakpoint.
///
/// The keys `_` and `base` address the base layer (no media query).
///
/// # Example
///
/// ```rust
/// use typeset_render::Responsive;
///
/// let plain: Responsive<String> = serde_json::from_str(r#""large""#).unwrap();
/// assert!(matches!(plain, Responsive::Plain(_)));
///
/// let by_bp: Responsive<String> =
///     serde_json::from_str(r#"{"_": "small", "medium": "large"}"#).unwrap();
/// assert!(matches!(by_bp, Responsive::ByBreakpoint(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    /// The same value at every viewport width.
    Plain(T),
    /// A value per breakpoint name.
    ByBreakpoint(BTreeMap<String, T>),
}

impl<T> Responsive<T> {
    /// Builds a per-breakpoint value from `(name, value)` pairs.
    pub fn by_breakpoint<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Responsive::ByBreakpoint(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<T: Default> Default for Responsive<T> {
    fn default() -> Self {
        Responsive::Plain(T::default())
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Plain(value)
    }
}

/// Expands a responsive value into a style object.
///
/// `f` maps a single value to its style props. A plain value fills the base
/// layer; mapped values fill the base layer (`_`/`base`) or the layer of the
/// named breakpoint.
///
/// # Errors
///
/// Returns [`RenderError::UnknownBreakpoint`] if a key names no breakpoint of
/// the theme, or whatever error `f` returns.
pub fn expand_responsive<T, F>(
    value: &Responsive<T>,
    theme: &Theme,
    mut f: F,
) -> Result<StyleObject, RenderError>
where
    F: FnMut(&T) -> Result<StyleProps, RenderError>,
{
    match value {
        Responsive::Plain(v) => Ok(StyleObject::from_base(f(v)?)),
        Responsive::ByBreakpoint(entries) => {
            let mut object = StyleObject::new();
            for (key, v) in entries {
                let props = f(v)?;
                if BASE_BREAKPOINT_KEYS.contains(&key.as_str()) {
                    object.extend_base(&props);
                    continue;
                }
                let breakpoint = theme
                    .breakpoint(key)
                    .ok_or_else(|| RenderError::UnknownBreakpoint(key.clone()))?;
                object.add_layer(breakpoint.clone(), props);
            }
            log::trace!(
                "expanded responsive value into {} breakpoint layer(s)",
                object.layers().len()
            );
            Ok(object)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::new()
            .with_breakpoint("small", 544)
            .with_breakpoint("medium", 768)
    }

    fn font_size(px: &u32) -> Result<StyleProps, RenderError> {
        Ok(StyleProps::new().with("fontSize", *px))
    }

    #[test]
    fn test_plain_fills_base() {
        let object = expand_responsive(&Responsive::Plain(14), &theme(), font_size).unwrap();
        assert_eq!(object.base().get("fontSize"), Some(&14.into()));
        assert!(object.layers().is_empty());
    }

    #[test]
    fn test_breakpoints_fill_layers() {
        let value = Responsive::by_breakpoint([("_", 12), ("medium", 16), ("small", 14)]);
        let object = expand_responsive(&value, &theme(), font_size).unwrap();
        assert_eq!(object.base().get("fontSize"), Some(&12.into()));
        let names: Vec<_> = object.layers().iter().map(|(bp, _)| bp.name()).collect();
        assert_eq!(names, vec!["small", "medium"]);
        assert_eq!(
            object.layer("medium").and_then(|p| p.get("fontSize")),
            Some(&16.into())
        );
    }

    #[test]
    fn test_unknown_breakpoint() {
        let value = Responsive::by_breakpoint([("huge", 40)]);
        let err = expand_responsive(&value, &theme(), font_size).unwrap_err();
        assert!(matches!(err, RenderError::UnknownBreakpoint(name) if name == "huge"));
    }

    #[test]
    fn test_mapper_error_propagates() {
        let value = Responsive::Plain(1u32);
        let err = expand_responsive(&value, &theme(), |_| {
            Err(RenderError::StyleError("boom".into()))
        })
        .unwrap_err();
        assert!(matches!(err, RenderError::StyleError(_)));
    }
}
