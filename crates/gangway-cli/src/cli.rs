//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gangway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON configuration file
    #[arg(short, long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one deployment request through the ingestion pipeline
    Deploy(DeployArgs),
    /// Check a command against the configured allowlist
    Check(CheckArgs),
    /// Generate a fresh shared-secret credential
    Secret,
}

#[derive(clap::Args)]
pub struct DeployArgs {
    /// Destination directory for the deployed content
    #[arg(long, value_name = "DIR")]
    pub dest: PathBuf,

    /// Credential to authenticate the request
    #[arg(long, value_name = "SECRET")]
    pub credential: String,

    /// Uploaded file (archive, or raw payload with --raw)
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    /// Command to run before anything is written
    #[arg(long, value_name = "CMD")]
    pub pre_command: Option<String>,

    /// Command to run after extraction
    #[arg(long, value_name = "CMD")]
    pub post_command: Option<String>,

    /// Request raw (non-archive) handling; requires allow_raw_uploads
    /// in the configuration
    #[arg(long)]
    pub raw: bool,

    /// Client origin to check against the allowed-origin list
    #[arg(long, value_name = "ADDR")]
    pub origin: Option<String>,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// The command string to authorize
    #[arg(value_name = "COMMAND")]
    pub command: String,
}
