//! # Typeset Render - Theme-Driven Styling for HTML Components
//!
//! `typeset-render` is the styling system underneath the `typeset`
//! components: it owns the theme, resolves style objects (including
//! responsive ones) to class names, and renders host elements to HTML.
//!
//! Components built on top of it stay thin: they pick a style object from
//! the theme, merge in the caller's props, and hand the result to a
//! [`StyleSheet`] and a [`MarkupEngine`].
//!
//! ## Core Concepts
//!
//! - [`Theme`]: breakpoints, colour and spacing scales, the `textSizes` table
//! - [`StyleProps`] / [`StyleObject`]: style-property objects, plain or per breakpoint
//! - [`Responsive`] and [`expand_responsive`]: values that vary by viewport
//! - [`StyleSheet`]: the class-name hook; collects generated CSS
//! - [`AttributeList`], [`Element`], [`MarkupEngine`]: HTML output
//!
//! ## Quick Start
//!
//! ```rust
//! use typeset_render::{
//!     expand_responsive, AttributeList, Element, MarkupEngine, Responsive, StyleProps,
//!     StyleSheet, Theme,
//! };
//!
//! let theme = Theme::from_yaml(r#"
//! breakpoints:
//!   medium: 768
//! "#).unwrap();
//!
//! let size = Responsive::by_breakpoint([("_", 14u32), ("medium", 16)]);
//! let object = expand_responsive(&size, &theme, |px| {
//!     Ok(StyleProps::new().with("fontSize", *px))
//! }).unwrap();
//!
//! let sheet = StyleSheet::new();
//! let class = sheet.class_for(&object, &theme).unwrap().unwrap();
//!
//! let mut attrs = AttributeList::new();
//! attrs.set("class", class.as_str()).unwrap();
//! let html = MarkupEngine::new().unwrap()
//!     .render(&Element::new("span").with_attributes(attrs).with_content("Hello"))
//!     .unwrap();
//!
//! assert!(html.starts_with("<span class=\"ts-"));
//! assert!(sheet.to_css().contains("@media (min-width: 768px)"));
//! ```

mod error;
pub mod markup;
pub mod responsive;
pub mod style;
pub mod theme;
mod util;

// Error type
pub use error::RenderError;

// Style module exports
pub use style::{
    validate_property, validate_value, Breakpoint, StyleObject, StyleProps, StyleSheet,
    StyleValue, StylesheetError,
};

// Theme module exports
pub use theme::{parse_theme, Theme};

// Responsive props
pub use responsive::{expand_responsive, Responsive};

// Markup exports
pub use markup::{AttributeList, Element, MarkupEngine};

// Utility exports
pub use util::kebab_case;
