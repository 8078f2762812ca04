//! Error types for style resolution and markup rendering.
//!
//! This module provides [`RenderError`], the primary error type for all
//! rendering operations. It abstracts over the underlying template engine's
//! errors, providing a stable public API.

use std::fmt;

use crate::style::StylesheetError;

/// Error type for rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// Markup template failure.
    TemplateError(String),

    /// Data serialization error.
    SerializationError(String),

    /// Style lookup or value error.
    StyleError(String),

    /// Theme document or value validation error.
    Stylesheet(StylesheetError),

    /// A responsive prop named a breakpoint the theme does not define.
    UnknownBreakpoint(String),

    /// An attribute name that cannot be written into markup.
    InvalidAttribute(String),

    /// Other operational error.
    OperationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::StyleError(msg) => write!(f, "style error: {}", msg),
            RenderError::Stylesheet(err) => write!(f, "{}", err),
            RenderError::UnknownBreakpoint(name) => write!(f, "unknown breakpoint: {}", name),
            RenderError::InvalidAttribute(name) => write!(f, "invalid attribute name: {:?}", name),
            RenderError::OperationError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Stylesheet(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StylesheetError> for RenderError {
    fn from(err: StylesheetError) -> Self {
        RenderError::Stylesheet(err)
    }
}

// Conversion from minijinja::Error - keeps the engine out of the public API
impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::TemplateNotFound
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::TemplateError(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::UnknownBreakpoint("huge".to_string());
        assert!(err.to_string().contains("unknown breakpoint"));
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn test_from_stylesheet_error_keeps_source() {
        use std::error::Error;

        let err: RenderError = StylesheetError::Load {
            message: "gone".to_string(),
        }
        .into();
        assert!(matches!(err, RenderError::Stylesheet(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_minijinja_syntax_error() {
        let mj_err = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let render_err: RenderError = mj_err.into();
        assert!(matches!(render_err, RenderError::TemplateError(_)));
    }
}
