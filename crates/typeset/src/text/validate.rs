//! Validation of Text props arriving as untyped data.
//!
//! Typed callers build [`TextProps`] directly and cannot produce an invalid
//! tag, size or variant. Props read from JSON or YAML go through
//! [`validate_props`] instead, which maps the public prop names onto
//! `TextProps` and rejects values outside the closed enumerations.
//!
//! Rejections are not fatal: each one is logged, reported as a
//! [`PropWarning`], and the prop falls back to its default. The only fatal
//! case is an explicit `null` for `as`, `size` or `variant`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use typeset_render::markup::is_valid_attribute_name;
use typeset_render::style::is_style_prop;
use typeset_render::{Responsive, StyleValue};

use super::props::{AriaAttribute, TextProps};
use super::size::{Size, Variant};
use super::tag::Tag;
use crate::error::{ParseEnumError, TextError};

/// A non-fatal problem found while validating untyped props.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropWarning {
    /// A value outside a closed enumeration; the default was used instead.
    #[error("prop `{prop}`: {error}; using default")]
    UnknownValue {
        prop: String,
        error: ParseEnumError,
    },

    /// A value of the wrong JSON type; the prop was ignored.
    #[error("prop `{prop}` must be {expected}; ignored")]
    WrongType {
        prop: String,
        expected: &'static str,
    },

    /// A key that is neither a Text prop nor a known style prop.
    #[error("unknown prop `{0}`; ignored")]
    UnknownProp(String),

    /// A custom attribute name that cannot appear in markup.
    #[error("invalid attribute name {0:?}; ignored")]
    InvalidAttributeName(String),
}

/// Props produced by [`validate_props`] plus everything that was rejected.
#[derive(Debug, Clone, Default)]
pub struct ValidatedProps {
    pub props: TextProps,
    pub warnings: Vec<PropWarning>,
}

impl ValidatedProps {
    /// Returns true if nothing was rejected.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validates untyped props.
///
/// Accepted keys: `as`, `size`, `variant`, `id`, `role`, `className`,
/// `style`, `dataAttributes`, the eight forwarded `aria-*` attributes,
/// `children`, and any style prop of the system vocabulary.
///
/// # Errors
///
/// Returns [`TextError::InvalidProps`] if `raw` is not an object and
/// [`TextError::MissingProp`] if `as`, `size` or `variant` is `null`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use typeset::{validate_props, Tag};
///
/// let validated = validate_props(&json!({ "as": "div", "fontWeight": 600 })).unwrap();
/// assert_eq!(validated.props.tag, Tag::P);
/// assert_eq!(validated.warnings.len(), 1);
/// ```
pub fn validate_props(raw: &Value) -> Result<ValidatedProps, TextError> {
    let object = raw
        .as_object()
        .ok_or_else(|| TextError::InvalidProps(format!("expected an object, got {}", kind(raw))))?;

    let mut out = ValidatedProps::default();
    for (key, value) in object {
        match key.as_str() {
            "as" => {
                if let Some(tag) = enum_prop::<Tag>("as", value, &mut out.warnings)? {
                    out.props.tag = tag;
                }
            }
            "variant" => {
                if let Some(variant) = enum_prop::<Variant>("variant", value, &mut out.warnings)? {
                    out.props.variant = variant;
                }
            }
            "size" => {
                if let Some(size) = size_prop(value, &mut out.warnings)? {
                    out.props.size = size;
                }
            }
            "id" => out.props.id = text_prop(key, value, &mut out.warnings),
            "role" => out.props.role = text_prop(key, value, &mut out.warnings),
            "className" => out.props.class_name = text_prop(key, value, &mut out.warnings),
            "children" => {
                if let Some(children) = text_prop(key, value, &mut out.warnings) {
                    out.props.children = children;
                }
            }
            "style" => match value.as_object() {
                Some(style) => {
                    for (name, v) in style {
                        match style_value(v) {
                            Some(v) => out.props.style.set(name.clone(), v),
                            None => warn(
                                &mut out.warnings,
                                PropWarning::WrongType {
                                    prop: format!("style.{}", name),
                                    expected: "a number or string",
                                },
                            ),
                        }
                    }
                }
                None => warn(
                    &mut out.warnings,
                    PropWarning::WrongType {
                        prop: key.clone(),
                        expected: "an object",
                    },
                ),
            },
            "dataAttributes" => data_attributes(value, &mut out)?,
            name if name.starts_with("aria-") => match name.parse::<AriaAttribute>() {
                Ok(attribute) => {
                    if let Some(v) = text_prop(key, value, &mut out.warnings) {
                        out.props.aria.set(attribute, v);
                    }
                }
                Err(_) => warn(&mut out.warnings, PropWarning::UnknownProp(key.clone())),
            },
            name if is_style_prop(name) => match style_value(value) {
                Some(v) => out.props.style_props.set(name, v),
                None => warn(
                    &mut out.warnings,
                    PropWarning::WrongType {
                        prop: key.clone(),
                        expected: "a number or string",
                    },
                ),
            },
            _ => warn(&mut out.warnings, PropWarning::UnknownProp(key.clone())),
        }
    }

    Ok(out)
}

fn warn(warnings: &mut Vec<PropWarning>, warning: PropWarning) {
    log::warn!("{}", warning);
    warnings.push(warning);
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn required(prop: &'static str, value: &Value) -> Result<(), TextError> {
    if value.is_null() {
        Err(TextError::MissingProp(prop))
    } else {
        Ok(())
    }
}

fn enum_prop<T>(
    prop: &'static str,
    value: &Value,
    warnings: &mut Vec<PropWarning>,
) -> Result<Option<T>, TextError>
where
    T: std::str::FromStr<Err = ParseEnumError>,
{
    required(prop, value)?;
    Ok(match value.as_str() {
        Some(s) => match s.parse::<T>() {
            Ok(v) => Some(v),
            Err(error) => {
                warn(
                    warnings,
                    PropWarning::UnknownValue {
                        prop: prop.to_string(),
                        error,
                    },
                );
                None
            }
        },
        None => {
            warn(
                warnings,
                PropWarning::WrongType {
                    prop: prop.to_string(),
                    expected: "a string",
                },
            );
            None
        }
    })
}

/// A size is a name, or an object of breakpoint → name. Unknown names inside
/// an object drop that breakpoint only.
fn size_prop(
    value: &Value,
    warnings: &mut Vec<PropWarning>,
) -> Result<Option<Responsive<Size>>, TextError> {
    required("size", value)?;
    match value {
        Value::Object(entries) => {
            let mut sizes = BTreeMap::new();
            for (breakpoint, v) in entries {
                let prop = format!("size.{}", breakpoint);
                let parsed = v.as_str().map(str::parse::<Size>);
                match parsed {
                    Some(Ok(size)) => {
                        sizes.insert(breakpoint.clone(), size);
                    }
                    Some(Err(error)) => warn(warnings, PropWarning::UnknownValue { prop, error }),
                    None => warn(
                        warnings,
                        PropWarning::WrongType {
                            prop,
                            expected: "a string",
                        },
                    ),
                }
            }
            Ok((!sizes.is_empty()).then_some(Responsive::ByBreakpoint(sizes)))
        }
        _ => Ok(enum_prop::<Size>("size", value, warnings)?.map(Responsive::Plain)),
    }
}

fn text_prop(key: &str, value: &Value, warnings: &mut Vec<PropWarning>) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        _ => {
            warn(
                warnings,
                PropWarning::WrongType {
                    prop: key.to_string(),
                    expected: "a string",
                },
            );
            None
        }
    }
}

fn style_value(value: &Value) -> Option<StyleValue> {
    match value {
        Value::Number(n) => n.as_f64().map(StyleValue::Number),
        Value::String(s) => Some(StyleValue::Keyword(s.clone())),
        _ => None,
    }
}

fn data_attributes(value: &Value, out: &mut ValidatedProps) -> Result<(), TextError> {
    let entries: &Map<String, Value> = match value.as_object() {
        Some(entries) => entries,
        None => {
            warn(
                &mut out.warnings,
                PropWarning::WrongType {
                    prop: "dataAttributes".to_string(),
                    expected: "an object",
                },
            );
            return Ok(());
        }
    };
    for (name, v) in entries {
        if !is_valid_attribute_name(name) {
            warn(&mut out.warnings, PropWarning::InvalidAttributeName(name.clone()));
            continue;
        }
        let prop = format!("dataAttributes.{}", name);
        if let Some(v) = text_prop(&prop, v, &mut out.warnings) {
            out.props.data_attributes.push((name.clone(), v));
        }
    }
    Ok(())
}
