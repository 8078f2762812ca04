//! The built-in theme and theme coverage checks.

use once_cell::sync::Lazy;
use typeset_render::{StylesheetError, Theme};

use crate::text::{Size, Variant};

/// YAML source of the built-in theme.
pub const DEFAULT_THEME_YAML: &str = include_str!("assets/default_theme.yaml");

static DEFAULT_THEME: Lazy<Result<Theme, StylesheetError>> = Lazy::new(|| {
    log::debug!("parsing built-in theme");
    Theme::from_yaml(DEFAULT_THEME_YAML).map(|t| t.with_name("default"))
});

/// Returns the built-in theme, parsed once per process.
///
/// # Example
///
/// ```rust
/// let theme = typeset::default_theme().unwrap();
/// assert_eq!(theme.name(), Some("default"));
/// assert_eq!(theme.breakpoints().len(), 4);
/// ```
pub fn default_theme() -> Result<&'static Theme, StylesheetError> {
    DEFAULT_THEME.as_ref().map_err(Clone::clone)
}

/// Loads a user theme file layered over the built-in theme.
///
/// The merged theme is validated again, so a user breakpoint that collides
/// with a built-in min-width is rejected.
pub fn load_theme(path: impl AsRef<std::path::Path>) -> Result<Theme, StylesheetError> {
    let path = path.as_ref();
    let user = Theme::from_file(path)?;
    let name = user.name().map(str::to_string);
    let merged = default_theme()?.clone().merge(user);
    merged
        .validate()
        .map_err(|e| e.with_path(path.to_path_buf()))?;
    Ok(match name {
        Some(name) => merged.with_name(name),
        None => merged,
    })
}

/// Lists the `textSizes` entries a theme lacks for the Text primitive.
///
/// An empty result means every variant/size pair resolves.
pub fn missing_text_sizes(theme: &Theme) -> Vec<(Variant, Size)> {
    Variant::ALL
        .into_iter()
        .flat_map(|variant| Size::ALL.into_iter().map(move |size| (variant, size)))
        .filter(|(variant, size)| theme.text_size(variant.as_str(), size.as_str()).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_parses() {
        let theme = default_theme().unwrap();
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_default_theme_covers_every_pair() {
        assert!(missing_text_sizes(default_theme().unwrap()).is_empty());
    }

    #[test]
    fn test_default_table_values() {
        let theme = default_theme().unwrap();
        let entry = theme.text_size("default", "default").unwrap();
        assert_eq!(entry.get("fontSize"), Some(&"14px".into()));
        let entry = theme.text_size("paragraph", "large").unwrap();
        assert_eq!(entry.get("lineHeight"), Some(&"28px".into()));
    }

    #[test]
    fn test_missing_text_sizes_reports_gaps() {
        let missing = missing_text_sizes(&Theme::new());
        assert_eq!(missing.len(), 8);
    }

    #[test]
    fn test_load_theme_layers_over_default() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brand.yaml");
        fs::write(
            &path,
            "textSizes:\n  default:\n    large: { fontSize: 17px, lineHeight: 24px }\n",
        )
        .unwrap();

        let theme = load_theme(&path).unwrap();
        assert_eq!(theme.name(), Some("brand"));
        assert_eq!(
            theme.text_size("default", "large").and_then(|p| p.get("fontSize")),
            Some(&"17px".into())
        );
        assert!(missing_text_sizes(&theme).is_empty());
        assert_eq!(theme.breakpoints().len(), 4);
    }

    #[test]
    fn test_load_theme_rejects_colliding_breakpoint() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tablet.yaml");
        fs::write(&path, "breakpoints:\n  tablet: 768\n").unwrap();

        let err = load_theme(&path).unwrap_err();
        assert!(matches!(err, StylesheetError::InvalidBreakpoint { .. }));
        assert!(err.to_string().contains("tablet.yaml"));
    }

    #[test]
    fn test_load_theme_rejects_unsafe_property() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brand.yaml");
        fs::write(
            &path,
            "textSizes:\n  default:\n    default: { \"x}body{display\": none }\n",
        )
        .unwrap();

        let err = load_theme(&path).unwrap_err();
        assert!(matches!(err, StylesheetError::InvalidProperty { .. }));
    }
}
