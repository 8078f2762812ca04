//! The style-prop vocabulary accepted from untyped callers.
//!
//! Typed callers may set any property on a [`StyleProps`](super::StyleProps);
//! props arriving as untyped data are checked against this list so that
//! arbitrary keys (event handlers, typos) never turn into CSS.

use super::props::shorthand_longhands;

const LONGHANDS: &[&str] = &[
    // space
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    // color
    "color",
    "backgroundColor",
    "opacity",
    // typography
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "letterSpacing",
    "lineHeight",
    "textAlign",
    "textDecoration",
    "textOverflow",
    "textTransform",
    "whiteSpace",
    "wordBreak",
    "overflowWrap",
    // layout
    "display",
    "width",
    "height",
    "minWidth",
    "maxWidth",
    "minHeight",
    "maxHeight",
    "overflow",
    "verticalAlign",
    // flexbox
    "alignSelf",
    "justifySelf",
    "flex",
    "flexGrow",
    "flexShrink",
    "flexBasis",
    "order",
    "gap",
    "rowGap",
    "columnGap",
    // border
    "border",
    "borderWidth",
    "borderStyle",
    "borderColor",
    "borderRadius",
    // position
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "zIndex",
    // misc
    "cursor",
    "userSelect",
];

/// Returns true if `name` is a longhand or shorthand style prop of the
/// system vocabulary.
///
/// # Example
///
/// ```rust
/// use typeset_render::style::is_style_prop;
///
/// assert!(is_style_prop("fontSize"));
/// assert!(is_style_prop("mx"));
/// assert!(!is_style_prop("onClick"));
/// ```
pub fn is_style_prop(name: &str) -> bool {
    LONGHANDS.contains(&name) || shorthand_longhands(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shorthand_expands_into_vocabulary() {
        for short in ["m", "mt", "mr", "mb", "ml", "mx", "my", "p", "pt", "pr", "pb", "pl", "px", "py", "bg"] {
            let longhands = shorthand_longhands(short).unwrap();
            for long in longhands {
                assert!(LONGHANDS.contains(long), "{} -> {}", short, long);
            }
        }
    }

    #[test]
    fn test_unknown_names() {
        assert!(!is_style_prop("href"));
        assert!(!is_style_prop("font-size"));
    }
}
