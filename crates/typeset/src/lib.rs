//! # Typeset - Themed Text Components for HTML
//!
//! `typeset` provides `Text`, a polymorphic text primitive for a design
//! system: it renders as one of a fixed set of inline host tags, takes its
//! font size and line height from the theme's `textSizes` table, lets the
//! caller override any style prop, and forwards id, role, inline style,
//! accessibility and custom attributes to the element.
//!
//! Styling is delegated to [`typeset_render`]: style objects become class
//! names in a [`StyleSheet`], and the generated CSS is collected there.
//!
//! ## Quick Start
//!
//! ```rust
//! use typeset::{AriaAttribute, Size, Tag, TextProps, TextRenderer, Variant};
//!
//! let renderer = TextRenderer::with_default_theme().unwrap();
//!
//! let element = renderer.render(
//!     &TextProps::new("Changes saved")
//!         .tag(Tag::Span)
//!         .size(Size::Small)
//!         .variant(Variant::Paragraph)
//!         .role("status")
//!         .aria(AriaAttribute::Live, "polite")
//!         .data_attribute("data-testid", "save-status"),
//! ).unwrap();
//!
//! let html = element.to_html();
//! assert!(html.starts_with("<span class=\"ts-"));
//! assert!(html.contains(r#"role="status""#));
//! assert!(html.contains(r#"aria-live="polite""#));
//! assert!(html.ends_with(">Changes saved</span>"));
//!
//! // The CSS behind the class.
//! assert!(renderer.css().contains("font-size:14px;line-height:21px"));
//! ```
//!
//! ## Responsive Sizes
//!
//! ```rust
//! use typeset::{Size, TextProps, TextRenderer};
//!
//! let renderer = TextRenderer::with_default_theme().unwrap();
//! renderer.render(
//!     &TextProps::new("Welcome").responsive_size([("_", Size::Default), ("medium", Size::Large)]),
//! ).unwrap();
//!
//! assert!(renderer.css().contains("@media (min-width: 768px)"));
//! ```
//!
//! ## Untyped Props
//!
//! Props read from JSON or YAML go through [`validate_props`], which rejects
//! values outside the closed enumerations with a logged [`PropWarning`] and
//! falls back to the defaults.
//!
//! ## Themes
//!
//! [`default_theme`] is embedded in the crate. [`load_theme`] layers a YAML
//! file on top of it; see [`typeset_render::theme`] for the document format.
//!
//! ## Command Line
//!
//! The `typeset` binary wraps [`cli::run`]: it reads props as JSON or YAML and
//! prints the rendered HTML, the generated CSS, or both.

pub mod cli;
mod error;
pub mod text;
pub mod theme;

pub use error::{ParseEnumError, TextError};
pub use text::{
    render_text, render_text_into, resolve_size_styles, text_size_style, validate_props,
    AriaAttribute, AriaAttributes, ElementHandle, InlineStyle, PropWarning, RenderContext,
    RenderedElement, Size, Tag, TextProps, TextRenderer, ValidatedProps, Variant,
};
pub use theme::{default_theme, load_theme, missing_text_sizes, DEFAULT_THEME_YAML};

// Re-exported so most callers only depend on this crate.
pub use typeset_render::{Responsive, StyleProps, StyleSheet, StyleValue, Theme};
