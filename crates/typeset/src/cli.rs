//! The `typeset` command line: renders Text props read from JSON or YAML to
//! HTML and CSS.
//!
//! ```text
//! $ echo '{"as": "span", "size": "large", "children": "Hi"}' | typeset --format html
//! <span class="ts-…">Hi</span>
//! ```
//!
//! [`run`] reads and writes through the handles it is given, so the binary
//! only parses arguments and sets up logging.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use typeset_render::StyleSheet;

use crate::text::{validate_props, TextRenderer};
use crate::theme::{default_theme, load_theme, missing_text_sizes};

/// What the command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Rendered elements only.
    Html,
    /// Generated stylesheet only.
    Css,
    /// Elements, a blank line, then the stylesheet.
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "typeset", version, about = "Render Text props to HTML and CSS")]
pub struct Cli {
    /// Props document (an object or a list of objects, JSON or YAML); `-` reads stdin.
    #[arg(short, long, default_value = "-")]
    pub props: String,

    /// Theme file layered over the built-in theme.
    #[arg(short, long)]
    pub theme: Option<PathBuf>,

    /// What to print.
    #[arg(short, long, value_enum, default_value_t = Format::Both)]
    pub format: Format,

    /// Prefix for generated class names.
    #[arg(long, default_value = "ts")]
    pub prefix: String,

    /// Exit with an error if any prop is rejected.
    #[arg(long)]
    pub strict: bool,
}

/// Renders every props object of the input document and prints the result.
///
/// `stdin` is only read when `--props` is `-`.
pub fn run(cli: &Cli, stdin: impl Read, mut out: impl Write) -> Result<()> {
    let theme = match &cli.theme {
        Some(path) => {
            load_theme(path).with_context(|| format!("loading theme {}", path.display()))?
        }
        None => default_theme()?.clone(),
    };
    for (variant, size) in missing_text_sizes(&theme) {
        log::warn!("theme has no text size for {}/{}", variant, size);
    }

    let source = read_props(&cli.props, stdin)?;
    let document: Value = serde_yaml::from_str(&source).context("parsing props")?;
    let items = match document {
        Value::Array(items) => items,
        other => vec![other],
    };

    let sheet = StyleSheet::with_prefix(cli.prefix.as_str()).context("invalid --prefix")?;
    let renderer = TextRenderer::new(theme)?.with_sheet(sheet);
    let mut html = Vec::with_capacity(items.len());
    for (index, raw) in items.iter().enumerate() {
        let validated = validate_props(raw).with_context(|| format!("props #{}", index))?;
        if cli.strict && !validated.is_clean() {
            bail!(
                "props #{} rejected: {}",
                index,
                validated
                    .warnings
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            );
        }
        let element = renderer
            .render(&validated.props)
            .with_context(|| format!("rendering props #{}", index))?;
        html.push(element.to_html().to_string());
    }

    match cli.format {
        Format::Html => writeln!(out, "{}", html.join("\n"))?,
        Format::Css => writeln!(out, "{}", renderer.css())?,
        Format::Both => writeln!(out, "{}\n\n{}", html.join("\n"), renderer.css())?,
    }
    Ok(())
}

fn read_props(source: &str, mut stdin: impl Read) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("reading props from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading {}", source))
    }
}
