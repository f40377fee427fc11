//! Error types for the deployment pipeline.

use crate::outcome::DeployStatus;
use thiserror::Error;

/// Result type alias using `DeployError`.
pub type Result<T> = std::result::Result<T, DeployError>;

/// Errors that can abort a deployment.
///
/// Every variant maps to exactly one outcome category (see
/// [`DeployError::status`]); the first failing pipeline step surfaces its
/// error and the remainder of the pipeline is skipped.
#[derive(Error, Debug)]
pub enum DeployError {
    /// Credential mismatch or malformed credential length.
    ///
    /// Deliberately carries no detail: the rejection path must not leak
    /// how much of the credential matched, or whether the length or the
    /// content was wrong.
    #[error("unauthorized")]
    Unauthorized,

    /// Command rejected by the configured allowlist.
    #[error("command not allowed: {command}")]
    CommandDenied {
        /// The command that failed authorization.
        command: String,
    },

    /// An allowlist pattern failed to compile.
    #[error("invalid allowlist pattern `{pattern}`")]
    InvalidPattern {
        /// The offending pattern string.
        pattern: String,
        /// Compilation error from the regex engine.
        #[source]
        source: regex::Error,
    },

    /// A required request field was missing or empty.
    #[error("bad request: missing {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The uploaded filename does not carry a recognized archive suffix.
    #[error("not an archive: {filename}")]
    NotAnArchive {
        /// The uploaded filename.
        filename: String,
    },

    /// An archive member declared an absolute or traversing path.
    #[error("unsafe archive member: {member}")]
    UnsafeMember {
        /// The member path exactly as declared in the archive listing.
        member: String,
    },

    /// Archive is corrupted or unreadable.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Maps this error to the outcome category the boundary layer reports.
    #[must_use]
    pub const fn status(&self) -> DeployStatus {
        match self {
            Self::Unauthorized => DeployStatus::Unauthorized,
            Self::CommandDenied { .. } => DeployStatus::Forbidden,
            Self::InvalidPattern { .. }
            | Self::MissingField { .. }
            | Self::NotAnArchive { .. }
            | Self::UnsafeMember { .. }
            | Self::InvalidArchive(_)
            | Self::Io(_) => DeployStatus::BadRequest,
        }
    }

    /// Returns `true` if this error represents a security rejection rather
    /// than an operational failure.
    #[must_use]
    pub const fn is_security_rejection(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::CommandDenied { .. } | Self::UnsafeMember { .. }
        )
    }
}
