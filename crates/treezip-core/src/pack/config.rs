//! Configuration for packing operations.

use crate::ArchiveError;
use crate::Result;

/// Configuration for packing a directory or a file list.
///
/// # Examples
///
/// ```
/// use treezip_core::pack::PackConfig;
///
/// let config = PackConfig::default()
///     .with_compression_level(9)
///     .with_sort_by_name(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Compression level: 0 stores entries, 1-9 deflate.
    ///
    /// `None` uses the deflate default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Pack hidden files and directories when no filter is supplied.
    ///
    /// Ignored when a filter is given; the filter alone decides then.
    ///
    /// Default: `false`.
    pub include_hidden: bool,

    /// Follow symbolic links to files and directories.
    ///
    /// Directory links are still subject to the visited-directory guard.
    /// When `false`, symbolic links are skipped.
    ///
    /// Default: `true`.
    pub follow_symlinks: bool,

    /// Emit an explicit entry (`name/`) for every packed directory.
    ///
    /// Keeps empty directories in the archive.
    ///
    /// Default: `true`.
    pub emit_directories: bool,

    /// Enumerate directory children sorted by file name.
    ///
    /// Default: `false` (filesystem order).
    pub sort_by_name: bool,
}

impl Default for PackConfig {
    /// Default values:
    /// - `compression_level`: `Some(6)`
    /// - `include_hidden`: `false`
    /// - `follow_symlinks`: `true`
    /// - `emit_directories`: `true`
    /// - `sort_by_name`: `false`
    fn default() -> Self {
        Self {
            compression_level: Some(6),
            include_hidden: false,
            follow_symlinks: true,
            emit_directories: true,
            sort_by_name: false,
        }
    }
}

impl PackConfig {
    /// Creates a new `PackConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is greater than 9.
    /// Use `validate()` for non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!(level <= 9, "compression level must be 0-9");
        self.compression_level = Some(level);
        self
    }

    /// Sets whether to include hidden files.
    #[must_use]
    pub fn with_include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets whether directory entries are emitted.
    #[must_use]
    pub fn with_emit_directories(mut self, emit: bool) -> Self {
        self.emit_directories = emit;
        self
    }

    /// Sets whether children are enumerated in name order.
    #[must_use]
    pub fn with_sort_by_name(mut self, sort: bool) -> Self {
        self.sort_by_name = sort;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::InvalidCompressionLevel` if the level is above 9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}
