//! Property and value validation for emitted CSS.
//!
//! Every property name and keyword value ends up inside a declaration block
//! of a generated stylesheet. A name that is not a plain identifier, or a
//! value that could close the declaration or the block, is rejected before
//! it is ever registered.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::error::StylesheetError;
use super::props::StyleProps;
use super::value::StyleValue;
use crate::util::kebab_case;

/// Checks that `value` is a self-contained CSS component value list.
///
/// Rejects semicolons, curly braces, `<`, unbalanced parentheses or
/// brackets, unterminated strings and malformed `url()` tokens.
///
/// # Example
///
/// ```rust
/// use typeset_render::style::validate_value;
///
/// assert!(validate_value("fontFamily", "\"Mona Sans\", sans-serif").is_ok());
/// assert!(validate_value("color", "red; background: url(x)").is_err());
/// ```
pub fn validate_value(property: &str, value: &str) -> Result<(), StylesheetError> {
    let invalid = || StylesheetError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
        path: None,
    };

    if value.contains('<') || !is_balanced(value) {
        return Err(invalid());
    }

    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    scan(&mut parser).map_err(|_| invalid())
}

/// Checks that a property name serializes to a single CSS identifier.
///
/// camelCase names, vendor prefixes (`WebkitLineClamp`) and custom
/// properties (`--accent`) pass.
///
/// # Example
///
/// ```rust
/// use typeset_render::style::validate_property;
///
/// assert!(validate_property("fontSize").is_ok());
/// assert!(validate_property("--accent").is_ok());
/// assert!(validate_property("color:red}body{display").is_err());
/// ```
pub fn validate_property(property: &str) -> Result<(), StylesheetError> {
    if is_identifier(&kebab_case(property)) {
        Ok(())
    } else {
        Err(StylesheetError::InvalidProperty {
            property: property.to_string(),
            path: None,
        })
    }
}

/// Returns true if `name` is one CSS identifier token made of ASCII
/// letters, digits, `-` and `_`.
pub(crate) fn is_identifier(name: &str) -> bool {
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return false;
    }
    let mut input = ParserInput::new(name);
    let mut parser = Parser::new(&mut input);
    let ident = matches!(
        parser.next_including_whitespace_and_comments(),
        Ok(Token::Ident(_))
    );
    ident && parser.is_exhausted()
}

/// Validates every property name and keyword value of a style object.
pub fn validate_props(props: &StyleProps) -> Result<(), StylesheetError> {
    for (name, value) in props.iter() {
        validate_property(name)?;
        if let StyleValue::Keyword(k) = value {
            validate_value(name, k)?;
        }
    }
    Ok(())
}

fn scan<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
    loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        match token {
            Token::Semicolon
            | Token::CurlyBracketBlock
            | Token::CloseCurlyBracket
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::BadString(_)
            | Token::BadUrl(_) => return Err(parser.new_custom_error(())),
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                parser.parse_nested_block(scan)?;
            }
            _ => {}
        }
    }
}

/// The tokenizer closes open blocks at end of input, so balance is checked
/// separately. Quoted strings are skipped.
fn is_balanced(value: &str) -> bool {
    let mut stack = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in value.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty() && quote.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values_pass() {
        for value in ["14px", "bold", "1.25rem", "calc(100% - 8px)", "var(--fg)", "#1f2328"] {
            assert!(validate_value("x", value).is_ok(), "{}", value);
        }
    }

    #[test]
    fn test_quoted_font_family_passes() {
        assert!(validate_value("fontFamily", "'Hubot Sans', \"Mona Sans\"").is_ok());
    }

    #[test]
    fn test_semicolon_rejected() {
        assert!(validate_value("color", "red;color:blue").is_err());
    }

    #[test]
    fn test_braces_rejected() {
        assert!(validate_value("color", "red}body{color:red").is_err());
        assert!(validate_value("color", "calc(}").is_err());
    }

    #[test]
    fn test_unbalanced_rejected() {
        assert!(validate_value("width", "calc(100% - 8px").is_err());
        assert!(validate_value("width", "100%)").is_err());
    }

    #[test]
    fn test_unterminated_string_rejected() {
        assert!(validate_value("fontFamily", "\"Mona").is_err());
    }

    #[test]
    fn test_markup_rejected() {
        assert!(validate_value("content", "x</style>").is_err());
    }

    #[test]
    fn test_property_names() {
        for name in ["color", "fontSize", "WebkitLineClamp", "--accent", "grid-area"] {
            assert!(validate_property(name).is_ok(), "{}", name);
        }
        for name in ["", "-", "1col", "font size", "color:red}body{display", "x;y", "a\\62"] {
            assert!(
                matches!(
                    validate_property(name),
                    Err(StylesheetError::InvalidProperty { .. })
                ),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_validate_props_rejects_bad_names() {
        let bad = StyleProps::new().with("x}body{display", "none");
        assert!(matches!(
            validate_props(&bad),
            Err(StylesheetError::InvalidProperty { .. })
        ));
    }

    #[test]
    fn test_identifier() {
        assert!(is_identifier("ts"));
        assert!(is_identifier("brand_ui-2"));
        assert!(!is_identifier("my prefix"));
        assert!(!is_identifier("x{"));
        assert!(!is_identifier("9lives"));
    }

    #[test]
    fn test_validate_props_checks_keywords_only() {
        let ok = StyleProps::new().with("fontSize", 14).with("color", "red");
        assert!(validate_props(&ok).is_ok());
        let bad = StyleProps::new().with("color", "red;");
        assert!(matches!(
            validate_props(&bad),
            Err(StylesheetError::InvalidValue { .. })
        ));
    }
}
