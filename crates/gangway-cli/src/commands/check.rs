//! `gangway check` - test a command against the configured allowlist.

use std::path::Path;

use anyhow::Result;
use anyhow::bail;
use gangway_core::CommandAllowlist;
use gangway_core::command::Decision;

use crate::cli::CheckArgs;
use crate::config;

pub fn execute(args: &CheckArgs, config_path: &Path) -> Result<()> {
    let config = config::load(config_path)?;
    let allowlist = CommandAllowlist::new(&config.command_allowlist)?;

    match allowlist.authorize(&args.command) {
        Decision::Allowed => {
            println!("allowed: {}", args.command);
            Ok(())
        }
        Decision::Denied => {
            println!("denied: {}", args.command);
            bail!("command does not match any allowlist pattern");
        }
    }
}
