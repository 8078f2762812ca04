//! YAML theme document parsing.
//!
//! A theme document has four optional top-level sections:
//!
//! ```yaml
//! breakpoints:        # name -> min-width in px, ascending
//!   small: 544
//!   medium: 768
//! colors:             # nested maps flatten to dotted names
//!   fg:
//!     default: "#1f2328"
//!     muted: "#59636e"
//! space: [0, 4, 8, 16, 24, 32]
//! textSizes:          # variant -> size -> style props
//!   default:
//!     default: { fontSize: 14px, lineHeight: 20px }
//! ```

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::style::{Breakpoint, StyleProps, StyleValue, StylesheetError};

/// Parsed sections of a theme document, before they are assembled into a
/// [`Theme`](super::Theme).
#[derive(Debug, Clone, Default)]
pub struct ThemeDocument {
    pub(crate) breakpoints: Vec<Breakpoint>,
    pub(crate) colors: BTreeMap<String, String>,
    pub(crate) space: Vec<StyleValue>,
    pub(crate) text_sizes: BTreeMap<String, BTreeMap<String, StyleProps>>,
}

/// Parses a YAML theme document.
///
/// # Errors
///
/// Returns [`StylesheetError::Parse`] for malformed YAML and
/// [`StylesheetError::InvalidDefinition`] for sections of the wrong shape or
/// unknown top-level keys.
pub fn parse_theme(yaml: &str) -> Result<ThemeDocument, StylesheetError> {
    let root: Value = serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
        path: None,
        message: e.to_string(),
    })?;

    let mut doc = ThemeDocument::default();
    let root = match root {
        Value::Null => return Ok(doc),
        Value::Mapping(m) => m,
        _ => return Err(invalid("<root>", "expected a mapping of theme sections")),
    };

    for (key, value) in root {
        let key = key_str(&key, "<root>")?;
        match key.as_str() {
            "breakpoints" => doc.breakpoints = parse_breakpoints(&value)?,
            "colors" => flatten_colors(&value, "", &mut doc.colors)?,
            "space" => doc.space = parse_space(&value)?,
            "textSizes" => doc.text_sizes = parse_text_sizes(&value)?,
            other => return Err(invalid(other, "unknown theme section")),
        }
    }

    Ok(doc)
}

fn invalid(section: &str, message: &str) -> StylesheetError {
    StylesheetError::InvalidDefinition {
        section: section.to_string(),
        message: message.to_string(),
        path: None,
    }
}

fn key_str(key: &Value, section: &str) -> Result<String, StylesheetError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(invalid(section, "keys must be strings")),
    }
}

fn as_mapping<'a>(value: &'a Value, section: &str) -> Result<&'a Mapping, StylesheetError> {
    value
        .as_mapping()
        .ok_or_else(|| invalid(section, "expected a mapping"))
}

fn parse_breakpoints(value: &Value) -> Result<Vec<Breakpoint>, StylesheetError> {
    let mut breakpoints = Vec::new();
    for (key, width) in as_mapping(value, "breakpoints")? {
        let name = key_str(key, "breakpoints")?;
        let min_width = width
            .as_u64()
            .and_then(|w| u32::try_from(w).ok())
            .ok_or_else(|| StylesheetError::InvalidBreakpoint {
                name: name.clone(),
                message: "min-width must be a non-negative integer".to_string(),
                path: None,
            })?;
        breakpoints.push(Breakpoint::new(name, min_width));
    }
    Ok(breakpoints)
}

fn flatten_colors(
    value: &Value,
    prefix: &str,
    out: &mut BTreeMap<String, String>,
) -> Result<(), StylesheetError> {
    let section = if prefix.is_empty() { "colors" } else { prefix };
    for (key, entry) in as_mapping(value, section)? {
        let key = key_str(key, section)?;
        let name = if prefix.is_empty() {
            key
        } else {
            format!("{}.{}", prefix, key)
        };
        match entry {
            Value::String(color) => {
                out.insert(name, color.clone());
            }
            Value::Mapping(_) => flatten_colors(entry, &name, out)?,
            _ => return Err(invalid(&name, "colors must be strings or nested mappings")),
        }
    }
    Ok(())
}

fn parse_space(value: &Value) -> Result<Vec<StyleValue>, StylesheetError> {
    let seq = value
        .as_sequence()
        .ok_or_else(|| invalid("space", "expected a sequence"))?;
    seq.iter()
        .map(|v| parse_value(v, "space"))
        .collect::<Result<Vec<_>, _>>()
}

fn parse_value(value: &Value, section: &str) -> Result<StyleValue, StylesheetError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(StyleValue::Number)
            .ok_or_else(|| invalid(section, "number out of range")),
        Value::String(s) => Ok(StyleValue::Keyword(s.clone())),
        _ => Err(invalid(section, "values must be numbers or strings")),
    }
}

fn parse_text_sizes(
    value: &Value,
) -> Result<BTreeMap<String, BTreeMap<String, StyleProps>>, StylesheetError> {
    let mut table = BTreeMap::new();
    for (variant_key, sizes) in as_mapping(value, "textSizes")? {
        let variant = key_str(variant_key, "textSizes")?;
        let section = format!("textSizes.{}", variant);
        let mut row = BTreeMap::new();
        for (size_key, props) in as_mapping(sizes, &section)? {
            let size = key_str(size_key, &section)?;
            let section = format!("{}.{}", section, size);
            let mut style = StyleProps::new();
            for (prop_key, prop_value) in as_mapping(props, &section)? {
                let prop = key_str(prop_key, &section)?;
                style.set(prop, parse_value(prop_value, &section)?);
            }
            row.insert(size, style);
        }
        table.insert(variant, row);
    }
    Ok(table)
}
