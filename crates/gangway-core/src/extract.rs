//! Controlled archive extraction.
//!
//! The engine enumerates members in archive-declared order and validates
//! every declared path (see [`crate::member`]) before any member is
//! written to disk. A single unsafe member therefore aborts the whole
//! ingestion with nothing extracted. A mid-extraction I/O failure can
//! still leave already-written members behind; the temporary archive
//! artifact itself is owned and cleaned up by the orchestrator on every
//! exit path.

use std::fs::File;
use std::io;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::DeployError;
use crate::error::Result;
use crate::formats::ArchiveKind;
use crate::member::validate_member;

/// Extracts an archive into `dest_dir`, preserving its declared directory
/// structure. Returns the number of members materialized.
///
/// # Errors
///
/// Returns an error if:
/// - Any declared member path fails validation under `untrusted_mode`
///   ([`DeployError::UnsafeMember`], with the offending path; nothing is
///   extracted in this case)
/// - The archive is corrupt or unreadable
/// - A filesystem write fails
pub fn extract(
    archive_path: &Path,
    kind: ArchiveKind,
    dest_dir: &Path,
    untrusted_mode: bool,
) -> Result<usize> {
    match kind {
        ArchiveKind::Zip => extract_zip(archive_path, dest_dir, untrusted_mode),
        ArchiveKind::TarGz => extract_tar_gz(archive_path, dest_dir, untrusted_mode),
    }
}

fn extract_zip(archive_path: &Path, dest_dir: &Path, untrusted_mode: bool) -> Result<usize> {
    let file = File::open(archive_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| DeployError::InvalidArchive(e.to_string()))?;

    // Validation pass over the central directory, in declared order, before
    // any extraction I/O.
    let mut declared_names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive
            .by_index_raw(index)
            .map_err(|e| DeployError::InvalidArchive(e.to_string()))?;
        let declared = String::from_utf8_lossy(entry.name_raw()).into_owned();
        validate_member(&declared, untrusted_mode)?;
        declared_names.push(declared);
    }

    let mut extracted = 0;
    for (index, declared) in declared_names.iter().enumerate() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| DeployError::InvalidArchive(e.to_string()))?;
        let target = dest_dir.join(declared);

        if entry.is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            io::copy(&mut entry, &mut out)?;
        }
        extracted += 1;
    }

    Ok(extracted)
}

fn extract_tar_gz(archive_path: &Path, dest_dir: &Path, untrusted_mode: bool) -> Result<usize> {
    // Tar entries stream; validating the full listing first means reading
    // the archive twice, trading a decompression pass for the guarantee
    // that an unsafe member never coexists with extracted files.
    let mut listing = tar::Archive::new(GzDecoder::new(File::open(archive_path)?));
    for entry in listing.entries()? {
        let entry = entry?;
        let declared = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        validate_member(&declared, untrusted_mode)?;
    }

    let mut archive = tar::Archive::new(GzDecoder::new(File::open(archive_path)?));
    let mut extracted = 0;
    for entry in archive.entries()? {
        let mut entry = entry?;
        let declared = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let target = dest_dir.join(&declared);
        let entry_type = entry.header().entry_type();

        if entry_type.is_dir() {
            std::fs::create_dir_all(&target)?;
        } else if entry_type.is_file() {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            io::copy(&mut entry, &mut out)?;
        } else {
            // Links and specials are not part of the ingestion contract.
            log::warn!("skipping unsupported tar entry type for {declared}");
            continue;
        }
        extracted += 1;
    }

    Ok(extracted)
}
