//! Trace or time the classic sorts on the fixed 64 element dataset.

use std::io;

use clap::Parser;
use sort_exploration_rs::cli::{self, Args};
use sort_exploration_rs::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    let args = Args::parse();

    // stdout carries the dump, diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    cli::run(&args, stdout.lock())?;

    Ok(())
}
