//! Style-related error types.
//!
//! This module contains errors for both value validation and theme document
//! parsing.

use std::path::PathBuf;

/// Error type for theme document parsing and style value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetError {
    /// YAML parse error.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// A style value that cannot be emitted safely inside a declaration.
    InvalidValue {
        /// Property the value was given for.
        property: String,
        /// The offending value.
        value: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// A property name that is not a plain CSS identifier.
    InvalidProperty {
        /// The offending property name.
        property: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// Breakpoints are not strictly ascending or are malformed.
    InvalidBreakpoint {
        /// Breakpoint name where the error occurred.
        name: String,
        /// Description of what was wrong.
        message: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// Invalid section structure in a theme document.
    InvalidDefinition {
        /// Section (dotted path) where the error occurred.
        section: String,
        /// Description of what was wrong.
        message: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },
}

impl StylesheetError {
    /// Attaches a source path to errors that carry one.
    pub fn with_path(self, source: PathBuf) -> Self {
        match self {
            StylesheetError::Parse { message, .. } => StylesheetError::Parse {
                path: Some(source),
                message,
            },
            StylesheetError::InvalidValue {
                property, value, ..
            } => StylesheetError::InvalidValue {
                property,
                value,
                path: Some(source),
            },
            StylesheetError::InvalidProperty { property, .. } => {
                StylesheetError::InvalidProperty {
                    property,
                    path: Some(source),
                }
            }
            StylesheetError::InvalidBreakpoint { name, message, .. } => {
                StylesheetError::InvalidBreakpoint {
                    name,
                    message,
                    path: Some(source),
                }
            }
            StylesheetError::InvalidDefinition {
                section, message, ..
            } => StylesheetError::InvalidDefinition {
                section,
                message,
                path: Some(source),
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylesheetError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "Failed to parse theme {}: {}", p.display(), message)
                } else {
                    write!(f, "Failed to parse theme: {}", message)
                }
            }
            StylesheetError::InvalidValue {
                property,
                value,
                path,
            } => write!(
                f,
                "Invalid value '{}' for property '{}'{}",
                value,
                property,
                location(path)
            ),
            StylesheetError::InvalidProperty { property, path } => write!(
                f,
                "Invalid property name '{}'{}",
                property,
                location(path)
            ),
            StylesheetError::InvalidBreakpoint {
                name,
                message,
                path,
            } => write!(
                f,
                "Invalid breakpoint '{}'{}: {}",
                name,
                location(path),
                message
            ),
            StylesheetError::InvalidDefinition {
                section,
                message,
                path,
            } => write!(
                f,
                "Invalid definition for '{}'{}: {}",
                section,
                location(path),
                message
            ),
            StylesheetError::Load { message } => {
                write!(f, "Failed to load theme: {}", message)
            }
        }
    }
}

impl std::error::Error for StylesheetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = StylesheetError::InvalidValue {
            property: "color".to_string(),
            value: "red; x: y".to_string(),
            path: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("color"));
        assert!(msg.contains("red; x: y"));
    }

    #[test]
    fn test_with_path_adds_location() {
        let err = StylesheetError::InvalidBreakpoint {
            name: "medium".to_string(),
            message: "must be larger than 'small'".to_string(),
            path: None,
        }
        .with_path(PathBuf::from("themes/brand.yaml"));
        assert!(err.to_string().contains("in themes/brand.yaml"));
    }
}
