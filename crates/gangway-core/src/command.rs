//! Allowlist-based command authorization and execution.

use std::process::Command;

use regex::Regex;

use crate::error::DeployError;
use crate::error::Result;

/// Decision of the command authorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Command fully matched at least one allowlist pattern.
    Allowed,
    /// Command matched no pattern.
    Denied,
}

/// Ordered set of command patterns compiled for full-match evaluation.
///
/// A command is allowed iff it matches a pattern start-to-end; substring
/// matches never authorize. Evaluation short-circuits on the first match,
/// which cannot change the allow/deny outcome.
///
/// The unconfigured default is the single pattern `.+`, which allows every
/// non-empty command. This is a deliberate permissive default that
/// operators are expected to lock down; see `DeployConfig`.
#[derive(Debug, Clone)]
pub struct CommandAllowlist {
    patterns: Vec<Regex>,
}

impl CommandAllowlist {
    /// Compiles an allowlist from pattern strings.
    ///
    /// Each pattern is anchored as `^(?:pattern)$` so that authorization
    /// uses full-match semantics regardless of how the pattern was written.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::InvalidPattern`] for the first pattern that
    /// fails to compile. This is a configuration-time error: a deployment
    /// endpoint must refuse to start with a broken allowlist rather than
    /// fall back to denying (or worse, allowing) everything.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let anchored = format!("^(?:{pattern})$");
            let regex = Regex::new(&anchored).map_err(|source| DeployError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }

    /// Authorizes a command against the allowlist.
    #[must_use]
    pub fn authorize(&self, command: &str) -> Decision {
        if self.patterns.iter().any(|p| p.is_match(command)) {
            Decision::Allowed
        } else {
            Decision::Denied
        }
    }
}

/// Capability to execute an authorized command.
///
/// The orchestrator depends on this trait rather than spawning processes
/// directly, so the fire-and-forget contract can be tested without real
/// child processes.
pub trait CommandRunner {
    /// Runs a command synchronously, blocking until it exits.
    ///
    /// The command's exit status is not inspected by callers: a program
    /// that runs and fails is still a completed pipeline step. Only a
    /// failure to launch surfaces as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be spawned.
    fn run(&self, command: &str) -> std::io::Result<()>;
}

/// Production runner invoking the host shell.
///
/// Blocking, no timeout, exit status logged but ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> std::io::Result<()> {
        let status = Command::new("sh").arg("-c").arg(command).status()?;
        if !status.success() {
            log::warn!("command exited with {status}: {command}");
        }
        Ok(())
    }
}
