use anyhow::{Context, Result};
use clap::Parser;
use defect_stats::cli::Cli;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Log to stderr; `RUST_LOG` wins over the `--debug` default
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let report = defect_stats::run(&cli)?;
    match &cli.output {
        Some(path) => fs::write(path, report)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{report}"),
    }
    Ok(())
}
