//! Themes: breakpoints, scales and the text size table.
//!
//! A [`Theme`] is process-wide, read-only configuration. Components borrow it
//! for the duration of a render and never mutate it; reloading
//! ([`Theme::refresh`]) is the caller's business between renders.
//!
//! Themes are usually loaded from YAML (see [`parse_theme`] for the document
//! layout) and layered with [`Theme::merge`]: a shipped base theme first,
//! user overrides on top.

mod parse;
#[allow(clippy::module_inception)]
mod theme;

pub use parse::{parse_theme, ThemeDocument};
pub use theme::{Theme, BASE_BREAKPOINT_KEYS};
