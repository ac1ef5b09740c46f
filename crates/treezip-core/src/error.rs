//! Error types for packing, extraction and listing operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while packing, extracting or listing an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive container could not be created or opened.
    #[error("cannot open archive {path}: {reason}")]
    ArchiveOpen {
        /// Path of the archive.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// Copying bytes into an archive entry failed.
    #[error("failed to write entry '{name}': {reason}")]
    EntryWrite {
        /// Archive entry name.
        name: String,
        /// Underlying cause.
        reason: String,
    },

    /// An archive entry could not be read or is corrupt.
    #[error("failed to read entry '{name}': {reason}")]
    EntryRead {
        /// Archive entry name.
        name: String,
        /// Underlying cause.
        reason: String,
    },

    /// A requested entry does not exist in the archive.
    #[error("entry not found in archive: {name}")]
    EntryNotFound {
        /// The requested entry name.
        name: String,
    },

    /// A destination path would escape the extraction root.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The offending path or entry name.
        path: PathBuf,
    },

    /// An intermediate directory could not be created.
    #[error("cannot create directory {path}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Source path for packing does not exist.
    #[error("source path not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Source path was expected to be a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Source path was expected to be a regular file.
    #[error("not a regular file: {path}")]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// A walked path is not located under the packing root.
    #[error("path {path} is not under root directory {root}")]
    OutsideRoot {
        /// The walked path.
        path: PathBuf,
        /// The packing root.
        root: PathBuf,
    },

    /// Two inputs would be stored under the same entry name.
    #[error("duplicate entry name '{name}' from {path}")]
    DuplicateEntry {
        /// The entry name already taken.
        name: String,
        /// The input that would reuse it.
        path: PathBuf,
    },

    /// Compression level outside the supported range.
    #[error("invalid compression level {level}: must be 0-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },
}

impl ArchiveError {
    /// Returns `true` if this error was raised to keep extraction inside
    /// its destination directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use treezip_core::ArchiveError;
    ///
    /// let err = ArchiveError::PathTraversal {
    ///     path: PathBuf::from("../etc/passwd"),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = ArchiveError::EntryNotFound {
    ///     name: "missing.txt".into(),
    /// };
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. } | Self::OutsideRoot { .. })
    }

    /// Returns the archive entry name this error refers to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use treezip_core::ArchiveError;
    ///
    /// let err = ArchiveError::EntryWrite {
    ///     name: "docs/readme.txt".into(),
    ///     reason: "disk full".into(),
    /// };
    /// assert_eq!(err.entry_name(), Some("docs/readme.txt"));
    /// ```
    #[must_use]
    pub fn entry_name(&self) -> Option<&str> {
        match self {
            Self::EntryWrite { name, .. }
            | Self::EntryRead { name, .. }
            | Self::EntryNotFound { name }
            | Self::DuplicateEntry { name, .. } => Some(name),
            _ => None,
        }
    }
}
