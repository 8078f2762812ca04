//! `typeset` - renders Text props read from JSON or YAML to HTML and CSS.

use clap::Parser;
use typeset::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    run(&cli, std::io::stdin().lock(), std::io::stdout().lock())
}
