//! Archive kind detection from the uploaded filename.

/// Supported upload archive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// ZIP archive.
    Zip,
    /// Gzip-compressed tar archive.
    TarGz,
}

/// Detects the archive kind from an uploaded filename.
///
/// Detection is by suffix only (the filename is the client's declaration
/// of what it uploaded); content validation happens when the archive is
/// opened. Returns `None` for anything that is not a recognized archive
/// suffix, which the orchestrator reports as "not an archive".
#[must_use]
pub fn detect_from_name(filename: &str) -> Option<ArchiveKind> {
    let lower = filename.to_ascii_lowercase();
    if lower.ends_with(".zip") {
        Some(ArchiveKind::Zip)
    } else if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
        Some(ArchiveKind::TarGz)
    } else {
        None
    }
}
