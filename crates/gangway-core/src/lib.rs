//! Secure archive-ingestion and command-gating pipeline for remote
//! deployments.
//!
//! `gangway-core` takes an already-parsed deployment request (destination
//! path, credential, optional pre/post commands, uploaded payload) and
//! runs it through a fail-fast pipeline: constant-time credential
//! verification, allowlist-gated command execution, and controlled archive
//! extraction with zip-slip protection. The boundary layer (HTTP server,
//! CLI) only parses input and serializes the resulting
//! [`DeployOutcome`].
//!
//! # Examples
//!
//! ```no_run
//! use gangway_core::{DeployConfig, DeployRequest, Deployer, ShellRunner};
//!
//! # fn main() -> gangway_core::Result<()> {
//! let config = DeployConfig::new("0".repeat(60));
//! let deployer = Deployer::new(config, ShellRunner)?;
//!
//! let payload = std::fs::read("bundle.zip")?;
//! let request = DeployRequest::new("/srv/app", "0".repeat(60), "bundle.zip", payload);
//! let outcome = deployer.execute(request);
//! println!("{}: {}", outcome.status, outcome.message);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod command;
pub mod config;
pub mod deploy;
pub mod error;
pub mod extract;
pub mod formats;
pub mod member;
pub mod outcome;
pub mod request;

// Re-export main API types
pub use command::CommandAllowlist;
pub use command::CommandRunner;
pub use command::ShellRunner;
pub use config::DeployConfig;
pub use deploy::Deployer;
pub use error::DeployError;
pub use error::Result;
pub use outcome::DeployOutcome;
pub use outcome::DeployStatus;
pub use request::DeployRequest;
