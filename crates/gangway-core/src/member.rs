//! Archive member path validation.
//!
//! Member paths are validated exactly as declared in the archive's own
//! directory listing, before any extraction I/O happens for that member.
//! Validation is string-based and platform-independent: an archive created
//! on Windows must not bypass the checks when ingested on Unix, so both
//! separator styles are considered on every platform.

use crate::error::DeployError;
use crate::error::Result;

/// Validates a declared archive member path.
///
/// When `untrusted_mode` is `false` every path passes. This is the legacy
/// compatibility mode, an opt-in risk the operator accepts in
/// configuration.
///
/// When `untrusted_mode` is `true` a member is rejected if its path is
/// absolute (leading `/` or `\`, or a drive-letter prefix such as `C:`)
/// or if any path segment equals the parent-directory token `..`.
/// A single unsafe member is fatal for the entire ingestion.
///
/// # Errors
///
/// Returns [`DeployError::UnsafeMember`] carrying the declared path.
///
/// # Examples
///
/// ```
/// use gangway_core::member::validate_member;
///
/// assert!(validate_member("dir/file.txt", true).is_ok());
/// assert!(validate_member("../../etc/passwd", true).is_err());
/// assert!(validate_member("../../etc/passwd", false).is_ok());
/// ```
pub fn validate_member(declared: &str, untrusted_mode: bool) -> Result<()> {
    if !untrusted_mode {
        return Ok(());
    }

    if is_absolute_member(declared) || has_parent_segment(declared) {
        return Err(DeployError::UnsafeMember {
            member: declared.to_string(),
        });
    }

    Ok(())
}

/// Platform-independent absolute path detection on the declared string.
fn is_absolute_member(declared: &str) -> bool {
    if declared.starts_with('/') || declared.starts_with('\\') {
        return true;
    }
    // Drive-letter style prefix: `C:` followed by anything (or nothing).
    let bytes = declared.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Checks whether any `/`- or `\`-separated segment is `..`.
fn has_parent_segment(declared: &str) -> bool {
    declared
        .split(['/', '\\'])
        .any(|segment| segment == "..")
}
