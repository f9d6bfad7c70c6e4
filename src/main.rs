//! Terminal entry point.

use std::io;

use anyhow::Result;
use rust_hangman::{Session, ShellConfig, Terminal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ShellConfig::from_env();
    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());

    Session::new(terminal, config).run()?;
    Ok(())
}
