//! Structured deployment outcome returned to the boundary layer.

use crate::error::DeployError;

/// Outcome category of a deployment attempt.
///
/// Categories correspond to the HTTP statuses the boundary layer reports;
/// the core itself never speaks HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStatus {
    /// Ingestion completed.
    Ok,
    /// Malformed request, wrong file type, unreadable or unsafe archive.
    BadRequest,
    /// Credential mismatch.
    Unauthorized,
    /// Denied by policy (command allowlist, client origin).
    Forbidden,
}

impl DeployStatus {
    /// HTTP status code equivalent for this category.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Ok => 201,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
        }
    }
}

impl std::fmt::Display for DeployStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Ok => "ok",
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
        };
        f.write_str(label)
    }
}

/// Final result of one deployment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Outcome category.
    pub status: DeployStatus,
    /// Human-readable reason or confirmation.
    pub message: String,
}

impl DeployOutcome {
    /// Success outcome; the message distinguishes whether a gated command
    /// ran as part of the deployment.
    #[must_use]
    pub fn ok(command_executed: bool) -> Self {
        let message = if command_executed {
            "received and command executed"
        } else {
            "received"
        };
        Self {
            status: DeployStatus::Ok,
            message: message.to_string(),
        }
    }

    /// Outcome for a request whose client origin is not allowed.
    #[must_use]
    pub fn forbidden_origin(origin: &str) -> Self {
        Self {
            status: DeployStatus::Forbidden,
            message: format!("origin not allowed: {origin}"),
        }
    }

    /// Returns `true` if the deployment completed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == DeployStatus::Ok
    }
}

impl From<&DeployError> for DeployOutcome {
    fn from(err: &DeployError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}
