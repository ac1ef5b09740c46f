//! Test utilities for building archives and observing the packer.
//!
//! This module provides in-memory ZIP builders (including entries the packer
//! would never produce, such as `../` names) and [`EntrySink`]
//! implementations that record or reject entries.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use crate::ArchiveError;
use crate::Result;
use crate::codec::EntrySink;
use std::io::Cursor;
use std::io::Write;
use zip::write::SimpleFileOptions;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (name, content). Names ending with `/` become
/// directory entries and their content is ignored.
///
/// # Examples
///
/// ```
/// use treezip_core::test_utils::create_test_zip;
///
/// let entries: [(&str, &[u8]); 2] = [("dir/", b""), ("dir/nested.txt", b"world")];
/// let zip_data = create_test_zip(&entries);
/// assert!(!zip_data.is_empty());
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    entries
        .iter()
        .fold(ZipTestBuilder::new(), |builder, (name, data)| {
            if name.ends_with('/') {
                builder.add_directory(name)
            } else {
                builder.add_file(name, data)
            }
        })
        .build()
}

/// Builder for ZIP test archives with arbitrary, unchecked entry names.
///
/// # Examples
///
/// ```
/// use treezip_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .add_file("../escape.txt", b"evil")
///     .build();
/// assert!(!zip_data.is_empty());
/// ```
pub struct ZipTestBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a stored file entry.
    #[must_use]
    pub fn add_file(mut self, name: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644);

        self.zip.start_file(name, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, name: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(name, options).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink that keeps every entry in memory, in the order received.
///
/// Directory entries are stored with empty content.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry names in the order they were added.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Content written to the named entry.
    #[must_use]
    pub fn content(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, data)| data.as_slice())
    }
}

impl EntrySink for MemorySink {
    fn add_directory(&mut self, name: &str) -> Result<()> {
        self.entries.push((name.to_string(), Vec::new()));
        Ok(())
    }

    fn start_file(&mut self, name: &str) -> Result<&mut dyn Write> {
        self.entries.push((name.to_string(), Vec::new()));
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last].1)
    }
}

/// Sink that rejects one entry name and records everything before it.
#[derive(Debug)]
pub struct FailingSink {
    inner: MemorySink,
    fail_on: String,
}

impl FailingSink {
    /// Creates a sink that fails when `fail_on` is added.
    #[must_use]
    pub fn new(fail_on: impl Into<String>) -> Self {
        Self {
            inner: MemorySink::new(),
            fail_on: fail_on.into(),
        }
    }

    /// Entries accepted before the failure.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.inner.names()
    }

    fn check(&self, name: &str) -> Result<()> {
        if name == self.fail_on {
            return Err(ArchiveError::EntryWrite {
                name: name.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl EntrySink for FailingSink {
    fn add_directory(&mut self, name: &str) -> Result<()> {
        self.check(name)?;
        self.inner.add_directory(name)
    }

    fn start_file(&mut self, name: &str) -> Result<&mut dyn Write> {
        self.check(name)?;
        self.inner.start_file(name)
    }
}
