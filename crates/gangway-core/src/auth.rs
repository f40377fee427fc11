//! Shared-secret credential verification.
//!
//! The configured secret is a fixed-length opaque string. Verification is
//! constant-time over the secret bytes so that a network caller cannot use
//! response timing to recover the secret byte by byte.

use subtle::ConstantTimeEq;

/// Required credential length in bytes.
///
/// Candidates of any other length are rejected before the comparison runs.
pub const CREDENTIAL_LEN: usize = 60;

/// Decision of the credential verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Credential matched the configured secret.
    Authorized,
    /// Credential rejected. No partial-match information is available.
    Unauthorized,
}

/// Verifies a candidate credential against the configured secret.
///
/// Both sides must be exactly [`CREDENTIAL_LEN`] bytes; a malformed length
/// on either side short-circuits to `Unauthorized` without touching the
/// timing-sensitive comparison path. Equal-length inputs are compared
/// byte-wise in constant time.
///
/// # Examples
///
/// ```
/// use gangway_core::auth::{verify_credential, Access, CREDENTIAL_LEN};
///
/// let secret = "A".repeat(CREDENTIAL_LEN);
/// assert_eq!(verify_credential(&secret, &secret), Access::Authorized);
/// assert_eq!(verify_credential("short", &secret), Access::Unauthorized);
/// ```
#[must_use]
pub fn verify_credential(candidate: &str, configured: &str) -> Access {
    // Length pre-check guards the constant-time path: ct_eq is only
    // constant-time for equal-length inputs.
    if candidate.len() != CREDENTIAL_LEN || configured.len() != CREDENTIAL_LEN {
        return Access::Unauthorized;
    }

    if bool::from(candidate.as_bytes().ct_eq(configured.as_bytes())) {
        Access::Authorized
    } else {
        Access::Unauthorized
    }
}
