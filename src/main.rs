use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use atomchess_cli::{Session, SessionConfig};

fn main() -> Result<()> {
    // The board goes to stdout, so logs must not.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    info!("atomchess starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), SessionConfig::default());
    session.run().context("session aborted")?;
    Ok(())
}
