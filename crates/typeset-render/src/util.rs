//! Small string helpers shared by the style and markup modules.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Converts a camelCase property name to its kebab-case CSS form.
///
/// Names that already contain a dash (custom properties, vendor prefixes)
/// are returned unchanged.
///
/// # Example
///
/// ```rust
/// use typeset_render::kebab_case;
///
/// assert_eq!(kebab_case("fontSize"), "font-size");
/// assert_eq!(kebab_case("WebkitLineClamp"), "-webkit-line-clamp");
/// assert_eq!(kebab_case("--accent"), "--accent");
/// ```
pub fn kebab_case(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    // A leading capital marks a vendor prefix (`WebkitX`) and also gets a dash.
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Hashes a canonical CSS body into a stable class name.
pub(crate) fn class_name_for(prefix: &str, body: &str) -> String {
    let mut hasher = FxHasher::default();
    body.hash(&mut hasher);
    format!("{}-{:016x}", prefix, hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("color"), "color");
        assert_eq!(kebab_case("backgroundColor"), "background-color");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_class_name_is_stable() {
        let a = class_name_for("ts", "font-size:14px");
        let b = class_name_for("ts", "font-size:14px");
        let c = class_name_for("ts", "font-size:16px");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("ts-"));
        assert_eq!(a.len(), 3 + 16);
    }
}
