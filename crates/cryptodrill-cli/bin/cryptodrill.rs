//! cryptodrill binary entry point.
//!
//! Parses arguments, initializes logging, validates the configuration and
//! runs the selected command against stdin/stdout.

use anyhow::Result;
use cryptodrill_cli::{Config, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_args();

    // CRYPTODRILL_LOG / --log wins over RUST_LOG
    let filter = match &config.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Configuration loaded: seed={:?}, max_attempts={}",
        config.seed,
        config.max_attempts
    );

    config.validate()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&config, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
