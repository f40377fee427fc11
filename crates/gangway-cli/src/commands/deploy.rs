//! `gangway deploy` - run one deployment request through the pipeline.

use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use gangway_core::DeployOutcome;
use gangway_core::DeployRequest;
use gangway_core::Deployer;
use gangway_core::ShellRunner;

use crate::cli::DeployArgs;
use crate::config;
use crate::output;

pub fn execute(args: &DeployArgs, config_path: &Path, json: bool) -> Result<()> {
    let config = config::load(config_path)?;

    // Edge check, performed before the payload is even read.
    if let Some(origin) = &args.origin
        && !config.is_origin_allowed(origin)
    {
        let outcome = DeployOutcome::forbidden_origin(origin);
        output::print_outcome(&outcome, json)?;
        bail!("deployment rejected: {}", outcome.message);
    }

    let payload = std::fs::read(&args.file)
        .with_context(|| format!("failed to read upload file {}", args.file.display()))?;
    let filename = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("upload file has no usable name: {}", args.file.display()))?;

    let mut request = DeployRequest::new(&args.dest, &args.credential, filename, payload);
    request.pre_command = args.pre_command.clone();
    request.post_command = args.post_command.clone();
    request.raw_mode = args.raw;

    let deployer = Deployer::new(config, ShellRunner)?;
    let outcome = deployer.execute(request);
    output::print_outcome(&outcome, json)?;

    if !outcome.is_ok() {
        bail!("deployment rejected: {}", outcome.message);
    }
    Ok(())
}
