//! Host tags a Text element may render as.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// The closed set of inline/text-level host tags, selected with `as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Abbr,
    B,
    Cite,
    Code,
    Data,
    Del,
    Dfn,
    Em,
    I,
    Ins,
    Kbd,
    Label,
    Mark,
    #[default]
    P,
    Q,
    S,
    Samp,
    Small,
    Span,
    Strong,
    Sub,
    Sup,
}

impl Tag {
    /// Every tag, in alphabetical order.
    pub const ALL: [Tag; 22] = [
        Tag::Abbr,
        Tag::B,
        Tag::Cite,
        Tag::Code,
        Tag::Data,
        Tag::Del,
        Tag::Dfn,
        Tag::Em,
        Tag::I,
        Tag::Ins,
        Tag::Kbd,
        Tag::Label,
        Tag::Mark,
        Tag::P,
        Tag::Q,
        Tag::S,
        Tag::Samp,
        Tag::Small,
        Tag::Span,
        Tag::Strong,
        Tag::Sub,
        Tag::Sup,
    ];

    /// The HTML tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Abbr => "abbr",
            Tag::B => "b",
            Tag::Cite => "cite",
            Tag::Code => "code",
            Tag::Data => "data",
            Tag::Del => "del",
            Tag::Dfn => "dfn",
            Tag::Em => "em",
            Tag::I => "i",
            Tag::Ins => "ins",
            Tag::Kbd => "kbd",
            Tag::Label => "label",
            Tag::Mark => "mark",
            Tag::P => "p",
            Tag::Q => "q",
            Tag::S => "s",
            Tag::Samp => "samp",
            Tag::Small => "small",
            Tag::Span => "span",
            Tag::Strong => "strong",
            Tag::Sub => "sub",
            Tag::Sup => "sup",
        }
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("tag", s, &Self::names()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_p() {
        assert_eq!(Tag::default(), Tag::P);
    }

    #[test]
    fn test_round_trips_every_tag() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().parse::<Tag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_tags_are_distinct() {
        let mut names = Tag::names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 22);
    }

    #[test]
    fn test_block_tags_rejected() {
        for name in ["div", "h1", "P", "script", ""] {
            assert!(name.parse::<Tag>().is_err(), "{}", name);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let tag: Tag = serde_json::from_str("\"strong\"").unwrap();
        assert_eq!(tag, Tag::Strong);
        assert_eq!(serde_json::to_string(&Tag::Kbd).unwrap(), "\"kbd\"");
    }
}
