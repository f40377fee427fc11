//! Gangway CLI - boundary layer for the deployment ingestion pipeline.
//!
//! Stands in for the HTTP front-end: parses a deployment request from
//! flags and a JSON configuration file, performs the allowed-origin edge
//! check, and hands the typed request to `gangway-core`.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();

    match &cli.command {
        cli::Commands::Deploy(args) => commands::deploy::execute(args, &cli.config, cli.json),
        cli::Commands::Check(args) => commands::check::execute(args, &cli.config),
        cli::Commands::Secret => commands::secret::execute(),
    }
}
