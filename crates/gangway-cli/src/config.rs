//! Configuration file loading.
//!
//! The endpoint configuration is a JSON file loaded once at startup and
//! converted into the core's immutable `DeployConfig`.

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use gangway_core::DeployConfig;
use gangway_core::auth::CREDENTIAL_LEN;
use serde::Deserialize;

/// On-disk configuration schema.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Shared secret; should be exactly 60 characters.
    secret: String,

    /// Command allowlist patterns. The default `[".+"]` allows every
    /// non-empty command and must be locked down for production use.
    #[serde(default = "default_allowlist")]
    command_allowlist: Vec<String>,

    #[serde(default)]
    allow_raw_uploads: bool,

    #[serde(default = "default_true")]
    untrusted_archives: bool,

    #[serde(default = "default_spool_dir")]
    spool_dir: PathBuf,

    #[serde(default)]
    allowed_origins: Vec<String>,
}

fn default_allowlist() -> Vec<String> {
    vec![".+".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_spool_dir() -> PathBuf {
    PathBuf::from("uploads")
}

/// Loads and validates the configuration file.
pub fn load(path: &Path) -> Result<DeployConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration file {}", path.display()))?;
    let file: ConfigFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse configuration file {}", path.display()))?;

    if file.secret.len() != CREDENTIAL_LEN {
        log::warn!(
            "configured secret is {} characters, expected {CREDENTIAL_LEN}; \
             every request will be rejected",
            file.secret.len()
        );
    }
    if file.command_allowlist == default_allowlist() {
        log::warn!("command allowlist is the permissive default (.+); any command is allowed");
    }

    Ok(DeployConfig {
        secret: file.secret,
        command_allowlist: file.command_allowlist,
        allow_raw_uploads: file.allow_raw_uploads,
        untrusted_archives: file.untrusted_archives,
        spool_dir: file.spool_dir,
        allowed_origins: file.allowed_origins,
    })
}
