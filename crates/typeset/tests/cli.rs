use std::fs;

use clap::Parser;
use insta::{assert_snapshot, with_settings};
use tempfile::TempDir;
use typeset::cli::{run, Cli, Format};

/// Parses `args` like the binary does and runs them against `stdin`.
fn typeset(args: &[&str], stdin: &str) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("typeset").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&cli, stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["typeset"]).unwrap();
    assert_eq!(cli.props, "-");
    assert_eq!(cli.format, Format::Both);
    assert_eq!(cli.prefix, "ts");
    assert!(!cli.strict);
    assert!(cli.theme.is_none());
}

#[test]
fn test_format_both_snapshot() {
    let output = typeset(&[], r#"{"as": "span", "children": "Hi"}"#).unwrap();
    with_settings!({filters => vec![(r"ts-[0-9a-f]{16}", "[class]")]}, {
        assert_snapshot!(output.trim_end(), @r#"
<span class="[class]">Hi</span>

.[class]{font-size:14px;line-height:20px}
"#);
    });
}

#[test]
fn test_format_html() {
    let output = typeset(&["--format", "html"], r#"{"as": "span", "children": "Hi"}"#).unwrap();
    assert!(output.starts_with("<span class=\"ts-"), "{}", output);
    assert!(output.ends_with(">Hi</span>\n"), "{}", output);
    assert!(!output.contains("font-size"));
}

#[test]
fn test_format_css() {
    let output = typeset(&["-f", "css"], r#"{"size": "large"}"#).unwrap();
    assert!(output.starts_with(".ts-"), "{}", output);
    assert!(output.contains("{font-size:16px;line-height:24px}"), "{}", output);
    assert!(!output.contains('<'));
}

#[test]
fn test_yaml_list_of_props() {
    let stdin = "\
- as: em
  children: one
- as: strong
  size: large
  children: two
";
    let output = typeset(&["--format", "html"], stdin).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("<em "), "{}", lines[0]);
    assert!(lines[0].ends_with(">one</em>"), "{}", lines[0]);
    assert!(lines[1].starts_with("<strong "), "{}", lines[1]);
    assert!(lines[1].ends_with(">two</strong>"), "{}", lines[1]);

    let css = typeset(&["--format", "css"], stdin).unwrap();
    assert_eq!(css.lines().count(), 2);
}

#[test]
fn test_props_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("props.json");
    fs::write(&path, r#"{"as": "code", "children": "x"}"#).unwrap();

    let output = typeset(&["--props", path.to_str().unwrap(), "--format", "html"], "").unwrap();
    assert!(output.starts_with("<code "), "{}", output);
}

#[test]
fn test_missing_props_file() {
    let err = typeset(&["--props", "/nonexistent/props.json"], "").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/props.json"));
}

#[test]
fn test_rejected_prop_renders_without_strict() {
    let output = typeset(&["--format", "html"], r#"{"as": "div", "children": "x"}"#).unwrap();
    assert!(output.starts_with("<p "), "{}", output);
}

#[test]
fn test_strict_fails_on_rejected_prop() {
    let err = typeset(&["--strict"], r#"{"as": "div", "children": "x"}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("props #0 rejected"), "{}", message);
    assert!(message.contains("\"div\""), "{}", message);
}

#[test]
fn test_strict_accepts_clean_props() {
    assert!(typeset(&["--strict"], r#"{"as": "em", "children": "x"}"#).is_ok());
}

#[test]
fn test_theme_layers_over_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brand.yaml");
    fs::write(
        &path,
        "textSizes:\n  default:\n    default: { fontSize: 15px, lineHeight: 22px }\n",
    )
    .unwrap();

    let stdin = r#"{"size": {"_": "default", "medium": "large"}}"#;
    let output = typeset(&["--theme", path.to_str().unwrap(), "--format", "css"], stdin).unwrap();
    // From the theme file.
    assert!(output.contains("{font-size:15px;line-height:22px}"), "{}", output);
    // From the built-in theme underneath.
    assert!(
        output.contains("@media (min-width: 768px){"),
        "{}",
        output
    );
    assert!(output.contains("{font-size:16px;line-height:24px}"), "{}", output);
}

#[test]
fn test_invalid_theme_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tablet.yaml");
    fs::write(&path, "breakpoints:\n  tablet: 768\n").unwrap();

    let err = typeset(&["--theme", path.to_str().unwrap()], "{}").unwrap_err();
    assert!(err.to_string().contains("loading theme"), "{}", err);
}

#[test]
fn test_prefix() {
    let output = typeset(&["--prefix", "brand", "--format", "html"], "{}").unwrap();
    assert!(output.starts_with("<p class=\"brand-"), "{}", output);

    let err = typeset(&["--prefix", "my brand"], "{}").unwrap_err();
    assert!(err.to_string().contains("--prefix"), "{}", err);
}
