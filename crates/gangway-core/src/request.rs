//! Typed deployment request.

use std::path::PathBuf;

/// One parsed deployment request.
///
/// Constructed by the boundary layer from already-parsed submission
/// fields; the core never inspects raw request data. Consumed exactly
/// once by the orchestrator and discarded with the response.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    /// Destination directory for the deployed content. Caller-supplied
    /// and trusted as-is; the boundary layer decides who may set it.
    pub dest_dir: PathBuf,

    /// Credential to verify against the configured secret.
    pub credential: String,

    /// Filename of the upload as declared by the client.
    pub filename: String,

    /// Uploaded payload bytes.
    pub payload: Vec<u8>,

    /// Command to run before anything is written, if supplied.
    pub pre_command: Option<String>,

    /// Command to run after extraction, if supplied.
    pub post_command: Option<String>,

    /// Client asked for the raw (non-archive) upload path. Only honored
    /// when the configuration also permits raw uploads.
    pub raw_mode: bool,
}

impl DeployRequest {
    /// Creates a request with no commands and archive-mode handling.
    #[must_use]
    pub fn new(
        dest_dir: impl Into<PathBuf>,
        credential: impl Into<String>,
        filename: impl Into<String>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            dest_dir: dest_dir.into(),
            credential: credential.into(),
            filename: filename.into(),
            payload,
            pre_command: None,
            post_command: None,
            raw_mode: false,
        }
    }
}
