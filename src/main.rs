use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use geometry::{cli::Cli, report};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    let command = cli.command();
    tracing::info!(?command, "computing areas");

    let outcome = command.shapes();
    if let Err(error) = &outcome {
        tracing::info!(%error, "shape rejected");
    }

    report::write_outcome(&mut io::stdout().lock(), outcome).context("failed to write report")
}
