//! Extracting archives to the filesystem.
//!
//! Entries are processed one at a time, in archive order or in the order the
//! caller names them. Every entry name is resolved under the destination
//! directory before anything is written; names that would land outside it
//! abort the extraction with `ArchiveError::PathTraversal`.
//!
//! Extraction is not atomic. The first failure stops the run, files written
//! before it stay on disk, and only the partially written file of the failing
//! entry is removed.

mod extractor;
mod report;

pub use extractor::extract_all;
pub use extractor::extract_all_from;
pub use extractor::extract_entry;
pub use extractor::extract_entry_from;
pub use extractor::extract_subset;
pub use extractor::extract_subset_from;
pub use extractor::remove_files;
pub use report::ExtractionReport;
