//! Error conversion utilities for CLI.
//!
//! Converts treezip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use treezip_core::ArchiveError;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, archive: &Path) -> anyhow::Error {
    match err {
        ArchiveError::PathTraversal { path } => {
            anyhow!(
                "Security violation: Archive '{}' attempted path traversal with '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                path.display()
            )
        }
        ArchiveError::EntryNotFound { name } => {
            anyhow!(
                "Entry '{}' not found in '{}'\n\
                 HINT: Names are matched exactly and case-sensitively. \
                 Run 'treezip list {}' to see them.",
                name,
                archive.display(),
                archive.display()
            )
        }
        ArchiveError::ArchiveOpen { path, reason } => {
            anyhow!(
                "Cannot open archive '{}': {}\n\
                 HINT: The file may be missing, unreadable, or not a ZIP archive.",
                path.display(),
                reason
            )
        }
        ArchiveError::SourceNotFound { path } => {
            anyhow!("Source path not found: {}", path.display())
        }
        ArchiveError::NotADirectory { path } => {
            anyhow!(
                "Not a directory: {}\n\
                 HINT: Use 'treezip add' to pack individual files.",
                path.display()
            )
        }
        ArchiveError::DuplicateEntry { name, path } => {
            anyhow!(
                "Two inputs would both be stored as '{}' (second: {})\n\
                 HINT: 'treezip add' keeps only file names. Rename one file or pack \
                 their directory with 'treezip pack'.",
                name,
                path.display()
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error processing archive '{}'", archive.display())),
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, archive))
}
