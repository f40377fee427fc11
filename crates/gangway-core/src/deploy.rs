//! Deployment orchestration.
//!
//! Single pass, fail fast, no retries: verification, optional gated
//! pre-command, upload materialization, optional extraction, optional
//! gated post-command. The first failing step aborts the rest of the
//! pipeline; the spooled upload artifact is removed on every exit path
//! because it lives in a scope-owned temp file.

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use crate::auth::Access;
use crate::auth::verify_credential;
use crate::command::CommandAllowlist;
use crate::command::CommandRunner;
use crate::command::Decision;
use crate::config::DeployConfig;
use crate::error::DeployError;
use crate::error::Result;
use crate::extract::extract;
use crate::formats::detect_from_name;
use crate::outcome::DeployOutcome;
use crate::request::DeployRequest;

/// Runs deployment requests against one immutable configuration.
///
/// Holds the compiled command allowlist and the [`CommandRunner`]
/// capability; one value serves any number of requests.
pub struct Deployer<R: CommandRunner> {
    config: DeployConfig,
    allowlist: CommandAllowlist,
    runner: R,
}

impl<R: CommandRunner> Deployer<R> {
    /// Builds a deployer, compiling the configured command allowlist.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::InvalidPattern`] if any allowlist pattern
    /// fails to compile; a broken allowlist must prevent startup.
    pub fn new(config: DeployConfig, runner: R) -> Result<Self> {
        let allowlist = CommandAllowlist::new(&config.command_allowlist)?;
        Ok(Self {
            config,
            allowlist,
            runner,
        })
    }

    /// Read access to the configuration this deployer was built with.
    #[must_use]
    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// Executes one deployment request and reports the outcome.
    ///
    /// Never panics and never returns an error: every abort is folded
    /// into the outcome the boundary layer serializes.
    pub fn execute(&self, request: DeployRequest) -> DeployOutcome {
        let dest = request.dest_dir.display().to_string();
        match self.run(request) {
            Ok(command_executed) => {
                log::info!("deployment to {dest} completed");
                DeployOutcome::ok(command_executed)
            }
            Err(err) => {
                log::warn!("deployment to {dest} aborted: {err}");
                DeployOutcome::from(&err)
            }
        }
    }

    /// The pipeline proper. Returns whether any gated command executed.
    fn run(&self, request: DeployRequest) -> Result<bool> {
        if request.dest_dir.as_os_str().is_empty() {
            return Err(DeployError::MissingField { field: "path" });
        }

        // Received -> Authenticated. Nothing is written before this point.
        if verify_credential(&request.credential, &self.config.secret) == Access::Unauthorized {
            return Err(DeployError::Unauthorized);
        }

        // The upload filename is client-declared; only its final component
        // is ever used on disk.
        let filename = Path::new(&request.filename)
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or(DeployError::MissingField { field: "file" })?;

        // Authenticated -> PreCommandDone.
        let pre_executed = self.run_gated_command(request.pre_command.as_deref())?;

        // -> Stored -> Extracted.
        let raw = request.raw_mode && self.config.allow_raw_uploads;
        if request.raw_mode && !raw {
            log::warn!("raw upload requested but disabled by configuration, applying archive rules");
        }

        if raw {
            std::fs::create_dir_all(&request.dest_dir)?;
            std::fs::write(request.dest_dir.join(filename), &request.payload)?;
        } else {
            let kind = detect_from_name(filename).ok_or_else(|| DeployError::NotAnArchive {
                filename: filename.to_string(),
            })?;

            std::fs::create_dir_all(&self.config.spool_dir)?;
            let mut artifact = tempfile::Builder::new()
                .prefix("gangway-")
                .tempfile_in(&self.config.spool_dir)?;
            artifact.write_all(&request.payload)?;
            artifact.flush()?;

            std::fs::create_dir_all(&request.dest_dir)?;
            let count = extract(
                artifact.path(),
                kind,
                &request.dest_dir,
                self.config.untrusted_archives,
            )?;
            log::info!(
                "extracted {count} members to {}",
                request.dest_dir.display()
            );
            // `artifact` drops here; the spooled upload is removed whether
            // or not extraction succeeded.
        }

        // Extracted -> PostCommandDone.
        let post_executed = self.run_gated_command(request.post_command.as_deref())?;

        Ok(pre_executed || post_executed)
    }

    /// Authorizes and runs one command; absent or blank commands are a
    /// no-op. Exit status of the spawned program is not inspected.
    fn run_gated_command(&self, command: Option<&str>) -> Result<bool> {
        let Some(command) = command.map(str::trim).filter(|c| !c.is_empty()) else {
            return Ok(false);
        };

        match self.allowlist.authorize(command) {
            Decision::Allowed => {
                self.runner.run(command)?;
                Ok(true)
            }
            Decision::Denied => Err(DeployError::CommandDenied {
                command: command.to_string(),
            }),
        }
    }
}
