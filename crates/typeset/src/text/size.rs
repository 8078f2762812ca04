//! Text sizes and variants: the two keys of the `textSizes` table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// Named magnitude level for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xsmall,
    Small,
    #[default]
    Default,
    Large,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 4] = [Size::Xsmall, Size::Small, Size::Default, Size::Large];

    /// The name used as a `textSizes` key.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xsmall => "xsmall",
            Size::Small => "small",
            Size::Default => "default",
            Size::Large => "large",
        }
    }
}

/// Named style family selecting a row of the `textSizes` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Paragraph,
}

impl Variant {
    /// Every variant.
    pub const ALL: [Variant; 2] = [Variant::Default, Variant::Paragraph];

    /// The name used as a `textSizes` key.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.as_str() == s).ok_or_else(|| {
            let names: Vec<_> = Self::ALL.iter().map(|v| v.as_str()).collect();
            ParseEnumError::new("size", s, &names)
        })
    }
}

impl FromStr for Variant {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.as_str() == s).ok_or_else(|| {
            let names: Vec<_> = Self::ALL.iter().map(|v| v.as_str()).collect();
            ParseEnumError::new("variant", s, &names)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Size::default(), Size::Default);
        assert_eq!(Variant::default(), Variant::Default);
    }

    #[test]
    fn test_parse() {
        assert_eq!("xsmall".parse::<Size>().unwrap(), Size::Xsmall);
        assert_eq!("paragraph".parse::<Variant>().unwrap(), Variant::Paragraph);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "medium".parse::<Size>().unwrap_err();
        assert_eq!(err.kind, "size");
        assert!("heading".parse::<Variant>().is_err());
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for size in Size::ALL {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.as_str()));
        }
        for variant in Variant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
    }
}
