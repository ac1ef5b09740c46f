//! Extraction operation reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Report of an archive extraction operation.
///
/// `paths` lists every native path materialized, directories included, in
/// the order the entries were processed.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Native paths written or created, in processing order.
    pub paths: Vec<PathBuf>,

    /// Number of files extracted.
    pub files_extracted: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction operation.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of entries processed.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }

    /// Consumes the report and returns the materialized paths.
    #[must_use]
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }

    pub(crate) fn record_file(&mut self, path: &Path, bytes: u64) {
        self.files_extracted += 1;
        self.bytes_written = self.bytes_written.saturating_add(bytes);
        self.paths.push(path.to_path_buf());
    }

    pub(crate) fn record_directory(&mut self, path: &Path) {
        self.directories_created += 1;
        self.paths.push(path.to_path_buf());
    }
}
