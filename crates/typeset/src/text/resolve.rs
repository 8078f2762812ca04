//! Size/variant style resolution.

use typeset_render::{expand_responsive, RenderError, Responsive, StyleObject, StyleProps, Theme};

use super::size::{Size, Variant};
use crate::error::TextError;

/// Looks up the `textSizes` entry for one variant and plain size.
///
/// # Errors
///
/// Returns [`RenderError::StyleError`] if the theme has no entry for the pair.
pub fn text_size_style(
    theme: &Theme,
    variant: Variant,
    size: Size,
) -> Result<StyleProps, RenderError> {
    theme
        .text_size(variant.as_str(), size.as_str())
        .cloned()
        .ok_or_else(|| {
            RenderError::StyleError(format!(
                "theme has no textSizes entry for variant '{}' and size '{}'",
                variant, size
            ))
        })
}

/// Resolves a size (plain or per breakpoint) and variant to a style object.
///
/// A plain size yields the theme's `textSizes[variant][size]` entry as the
/// base layer. A per-breakpoint size is expanded through the theme's
/// breakpoints, each breakpoint getting the entry for its own size.
///
/// # Example
///
/// ```rust
/// use typeset::{default_theme, resolve_size_styles, Size, Variant};
/// use typeset_render::Responsive;
///
/// let theme = default_theme().unwrap();
/// let object = resolve_size_styles(&Responsive::Plain(Size::Default), Variant::Default, theme).unwrap();
/// assert_eq!(object.base().get("fontSize"), Some(&"14px".into()));
/// ```
pub fn resolve_size_styles(
    size: &Responsive<Size>,
    variant: Variant,
    theme: &Theme,
) -> Result<StyleObject, TextError> {
    let object = expand_responsive(size, theme, |s| text_size_style(theme, variant, *s))?;
    log::trace!(
        "resolved {} text size ({} breakpoint layer(s))",
        variant,
        object.layers().len()
    );
    Ok(object)
}
