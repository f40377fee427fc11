//! Deployment endpoint configuration.

use std::path::PathBuf;

/// Immutable configuration for the deployment endpoint.
///
/// Loaded once at process start by the boundary layer and passed by
/// reference into the pipeline; nothing in the core mutates it, so a
/// single value can serve concurrent requests.
///
/// # Security-relevant defaults
///
/// - `command_allowlist` defaults to `[".+"]`, which allows **every**
///   non-empty command. This is a permissive default operators must lock
///   down, not a bug.
/// - `untrusted_archives` defaults to `true` (strict member validation);
///   turning it off re-enables the legacy mode that trusts archive paths
///   as-is.
/// - `allow_raw_uploads` defaults to `false`: a request's raw flag alone
///   never bypasses archive validation.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Shared secret compared against the request credential.
    pub secret: String,

    /// Command allowlist patterns, evaluated with full-match semantics.
    pub command_allowlist: Vec<String>,

    /// Permit raw (non-archive) uploads when the request asks for them.
    pub allow_raw_uploads: bool,

    /// Enforce strict archive member path validation.
    pub untrusted_archives: bool,

    /// Directory where uploaded archives are spooled before extraction.
    pub spool_dir: PathBuf,

    /// Client origins permitted to deploy; empty list allows any origin.
    /// Enforced by the boundary layer, not the pipeline.
    pub allowed_origins: Vec<String>,
}

impl DeployConfig {
    /// Creates a configuration with the given secret and default policy.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            command_allowlist: vec![".+".to_string()],
            allow_raw_uploads: false,
            untrusted_archives: true,
            spool_dir: PathBuf::from("uploads"),
            allowed_origins: Vec::new(),
        }
    }

    /// Checks whether a client origin may use the endpoint.
    ///
    /// An empty allowed-origin list admits every origin.
    #[must_use]
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let config = DeployConfig::new("s");
        assert_eq!(config.command_allowlist, vec![".+".to_string()]);
        assert!(!config.allow_raw_uploads);
        assert!(config.untrusted_archives);
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_empty_origin_list_allows_all() {
        let config = DeployConfig::new("s");
        assert!(config.is_origin_allowed("10.0.0.7"));
        assert!(config.is_origin_allowed("anywhere"));
    }

    #[test]
    fn test_origin_list_is_exact_match() {
        let mut config = DeployConfig::new("s");
        config.allowed_origins = vec!["10.0.0.7".to_string()];
        assert!(config.is_origin_allowed("10.0.0.7"));
        assert!(!config.is_origin_allowed("10.0.0.8"));
        assert!(!config.is_origin_allowed("10.0.0.70"));
    }
}
