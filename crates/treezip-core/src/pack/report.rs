//! Packing operation reporting.

use crate::types::EntryName;
use std::time::Duration;

/// Report of a packing operation.
///
/// # Examples
///
/// ```
/// use treezip_core::pack::PackReport;
///
/// let mut report = PackReport::new();
/// report.files_added = 2;
/// report.directories_added = 1;
///
/// assert_eq!(report.total_entries(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Entry names written, in the order they were written.
    pub entries: Vec<String>,

    /// Number of file entries written.
    pub files_added: usize,

    /// Number of directory entries written.
    pub directories_added: usize,

    /// Directories skipped because they had already been packed.
    pub directories_skipped: usize,

    /// Files and directories rejected by the filter or the hidden rule, plus
    /// the archive file itself when it lies inside the packed tree.
    pub items_filtered: usize,

    /// Total uncompressed bytes written.
    pub bytes_written: u64,

    /// Duration of the operation.
    pub duration: Duration,
}

impl PackReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries written.
    #[must_use]
    pub const fn total_entries(&self) -> usize {
        self.files_added + self.directories_added
    }

    pub(crate) fn record_file(&mut self, name: EntryName, bytes: u64) {
        self.files_added += 1;
        self.bytes_written = self.bytes_written.saturating_add(bytes);
        self.entries.push(name.into_string());
    }

    pub(crate) fn record_directory(&mut self, name: EntryName) {
        self.directories_added += 1;
        self.entries.push(name.into_string());
    }
}
