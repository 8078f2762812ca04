//! Style-property objects and their merge rules.
//!
//! A [`StyleProps`] is an open mapping from camelCase property names to
//! [`StyleValue`]s. Objects are combined by merging left to right: when two
//! layers set the same key, the later layer wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::StyleValue;
use crate::util::kebab_case;

/// Shorthand props of the system vocabulary and the longhands they expand to.
const SHORTHANDS: &[(&str, &[&str])] = &[
    ("m", &["margin"]),
    ("mt", &["marginTop"]),
    ("mr", &["marginRight"]),
    ("mb", &["marginBottom"]),
    ("ml", &["marginLeft"]),
    ("mx", &["marginLeft", "marginRight"]),
    ("my", &["marginTop", "marginBottom"]),
    ("p", &["padding"]),
    ("pt", &["paddingTop"]),
    ("pr", &["paddingRight"]),
    ("pb", &["paddingBottom"]),
    ("pl", &["paddingLeft"]),
    ("px", &["paddingLeft", "paddingRight"]),
    ("py", &["paddingTop", "paddingBottom"]),
    ("bg", &["backgroundColor"]),
];

/// Returns the longhand properties a shorthand prop expands to.
pub fn shorthand_longhands(name: &str) -> Option<&'static [&'static str]> {
    SHORTHANDS
        .iter()
        .find(|(short, _)| *short == name)
        .map(|(_, long)| *long)
}

/// An open mapping from style-property name to value.
///
/// Keys are kept sorted so that two objects with the same content always
/// serialize, hash and compare identically.
///
/// # Example
///
/// ```rust
/// use typeset_render::StyleProps;
///
/// let theme = StyleProps::new().with("fontSize", 14).with("lineHeight", "20px");
/// let caller = StyleProps::new().with("fontSize", 20);
///
/// let merged = theme.merge(&caller);
/// assert_eq!(merged.get("fontSize"), Some(&20.into()));
/// assert_eq!(merged.get("lineHeight"), Some(&"20px".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleProps {
    props: BTreeMap<String, StyleValue>,
}

impl StyleProps {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        self.props.insert(name.into(), value.into());
    }

    /// Returns the value of a property.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.props.get(name)
    }

    /// Removes a property, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<StyleValue> {
        self.props.remove(name)
    }

    /// Returns true if the property is set.
    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Iterates over properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over property names in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// Returns a new object with `other` merged on top of `self`.
    ///
    /// Keys present in both take the value from `other`.
    pub fn merge(&self, other: &StyleProps) -> StyleProps {
        let mut merged = self.clone();
        merged.extend(other);
        merged
    }

    /// Merges `other` into `self` in place; `other` wins on collision.
    pub fn extend(&mut self, other: &StyleProps) {
        for (name, value) in &other.props {
            self.props.insert(name.clone(), value.clone());
        }
    }

    /// Folds an ordered list of layers left to right.
    ///
    /// The last layer to set a key decides its value.
    pub fn merged<'a, I>(layers: I) -> StyleProps
    where
        I: IntoIterator<Item = &'a StyleProps>,
    {
        layers.into_iter().fold(StyleProps::new(), |mut acc, layer| {
            acc.extend(layer);
            acc
        })
    }

    /// Replaces shorthand props (`m`, `px`, `bg`, ...) with their longhands.
    ///
    /// An explicit longhand always beats a value that arrived through a
    /// shorthand, whatever their order in the source object.
    pub fn expand_shorthands(&self) -> StyleProps {
        let mut expanded = StyleProps::new();
        for (name, value) in &self.props {
            if let Some(longhands) = shorthand_longhands(name) {
                for longhand in longhands {
                    if !self.props.contains_key(*longhand) {
                        expanded.set(*longhand, value.clone());
                    }
                }
            }
        }
        for (name, value) in &self.props {
            if shorthand_longhands(name).is_none() {
                expanded.set(name.clone(), value.clone());
            }
        }
        expanded
    }

    /// Returns `(kebab-case-name, css-value)` declaration pairs in key order.
    pub fn to_declarations(&self) -> Vec<(String, String)> {
        self.props
            .iter()
            .map(|(name, value)| (kebab_case(name), value.to_css(name)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleProps {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = StyleProps::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}
