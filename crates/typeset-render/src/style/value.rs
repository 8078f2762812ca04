//! Style values: the right-hand side of a style property.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Properties whose numeric values are emitted without a `px` unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "lineHeight",
    "fontWeight",
    "opacity",
    "zIndex",
    "flexGrow",
    "flexShrink",
    "order",
];

/// A single style value, either a bare number or a CSS keyword/length.
///
/// Numbers follow the usual design-system convention: they are pixel lengths
/// unless the property is unitless (`lineHeight`, `fontWeight`, ...), and on
/// spacing properties they may index the theme's `space` scale.
///
/// # Example
///
/// ```rust
/// use typeset_render::StyleValue;
///
/// let size: StyleValue = 14.into();
/// assert_eq!(size.to_css("fontSize"), "14px");
///
/// let weight: StyleValue = 600.into();
/// assert_eq!(weight.to_css("fontWeight"), "600");
///
/// let family: StyleValue = "monospace".into();
/// assert_eq!(family.to_css("fontFamily"), "monospace");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A numeric value (pixels unless the property is unitless).
    Number(f64),
    /// Any other CSS value, emitted verbatim.
    Keyword(String),
}

impl StyleValue {
    /// Serializes the value for use in a declaration of `property`.
    pub fn to_css(&self, property: &str) -> String {
        match self {
            StyleValue::Number(n) => {
                let number = format_number(*n);
                if *n == 0.0 || UNITLESS_PROPERTIES.contains(&property) {
                    number
                } else {
                    format!("{}px", number)
                }
            }
            StyleValue::Keyword(k) => k.clone(),
        }
    }

    /// Returns the keyword, if this is a keyword value.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            StyleValue::Keyword(k) => Some(k),
            StyleValue::Number(_) => None,
        }
    }

    /// Returns the number as a scale index, if it is a non-negative integer.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            StyleValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 => Some(*n as usize),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", format_number(*n)),
            StyleValue::Keyword(k) => write!(f, "{}", k),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Keyword(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Keyword(s)
    }
}
