//! Error types for the Text primitive.

use typeset_render::{RenderError, StylesheetError};

/// Errors that can occur while validating or rendering Text props.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// A required prop (`as`, `size`, `variant`) resolved to no value.
    ///
    /// Defaults make this unreachable through the typed API; it only fires
    /// for untyped props that explicitly carry `null`.
    #[error("`{0}` must not be undefined")]
    MissingProp(&'static str),

    /// Untyped props were not an object.
    #[error("Invalid props: {0}")]
    InvalidProps(String),

    /// Style resolution or markup rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Theme loading failed.
    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),
}

/// A string that is not a member of `Tag`, `Size` or `Variant`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?} (expected one of: {expected})")]
pub struct ParseEnumError {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated list of accepted names.
    pub expected: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
