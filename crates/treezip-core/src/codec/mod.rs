//! Entry-level archive access.
//!
//! The packer, extractor and lister only talk to archives through the two
//! traits in this module. Container framing and compression live behind
//! them; [`ZipSink`] and [`ZipSource`] implement them for ZIP files.

pub mod zip;

use crate::Result;
use std::io::Read;
use std::io::Write;

pub use self::zip::ZipSink;
pub use self::zip::ZipSource;

/// Metadata of one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Entry name, verbatim.
    pub name: String,

    /// Whether the entry is a directory marker.
    pub is_dir: bool,

    /// Uncompressed size in bytes.
    pub size: u64,

    /// Compressed size in bytes.
    pub compressed_size: u64,
}

/// Write side of an archive: receives entries one after another.
pub trait EntrySink {
    /// Adds a directory entry. `name` ends with `/`.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::EntryWrite` if the codec rejects the entry.
    fn add_directory(&mut self, name: &str) -> Result<()>;

    /// Starts a file entry and returns the stream its bytes go to.
    ///
    /// The entry ends when the next entry starts or the archive is finished.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::EntryWrite` if the codec rejects the entry.
    fn start_file(&mut self, name: &str) -> Result<&mut dyn Write>;
}

/// Read side of an archive: an ordered entry index plus per-entry streams.
pub trait EntrySource {
    /// Returns metadata for every entry, in archive order.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::EntryRead` if the index cannot be read.
    fn entries(&mut self) -> Result<Vec<EntryInfo>>;

    /// Looks an entry up by exact, case-sensitive name.
    fn entry(&mut self, name: &str) -> Option<EntryInfo>;

    /// Opens an entry's decompressed byte stream.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::EntryNotFound` for unknown names and
    /// `ArchiveError::EntryRead` for corrupt entries.
    fn open_entry(&mut self, name: &str) -> Result<Box<dyn Read + '_>>;

    /// Returns every entry name, in archive order.
    ///
    /// # Errors
    ///
    /// Same as [`EntrySource::entries`].
    fn entry_names(&mut self) -> Result<Vec<String>> {
        Ok(self.entries()?.into_iter().map(|info| info.name).collect())
    }
}
