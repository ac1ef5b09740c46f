//! ZIP implementation of the entry codec.

use crate::ArchiveError;
use crate::Result;
use crate::codec::EntryInfo;
use crate::codec::EntrySink;
use crate::codec::EntrySource;
use crate::pack::PackConfig;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;

/// Path reported in errors for archives that were not opened from a file.
pub const STREAM_LABEL: &str = "<stream>";

/// Writes entries into a ZIP container.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use std::io::Write;
/// use treezip_core::codec::EntrySink;
/// use treezip_core::codec::ZipSink;
/// use treezip_core::pack::PackConfig;
///
/// let mut sink = ZipSink::new(Cursor::new(Vec::new()), &PackConfig::default());
/// sink.add_directory("docs/")?;
/// sink.start_file("docs/readme.txt")?.write_all(b"hello")?;
/// let bytes = sink.finish()?.into_inner();
/// assert!(!bytes.is_empty());
/// # Ok::<(), treezip_core::ArchiveError>(())
/// ```
pub struct ZipSink<W: Write + Seek> {
    writer: ZipWriter<W>,
    options: SimpleFileOptions,
}

impl ZipSink<BufWriter<File>> {
    /// Creates (or truncates) the archive file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::ArchiveOpen` if the file cannot be created.
    pub fn create(path: impl AsRef<Path>, config: &PackConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ArchiveError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(BufWriter::new(file), config))
    }
}

impl<W: Write + Seek> ZipSink<W> {
    /// Wraps any seekable writer.
    pub fn new(writer: W, config: &PackConfig) -> Self {
        Self {
            writer: ZipWriter::new(writer),
            options: file_options(config),
        }
    }

    /// Writes the central directory and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::EntryWrite` if the trailer cannot be written.
    pub fn finish(self) -> Result<W> {
        self.writer.finish().map_err(|e| ArchiveError::EntryWrite {
            name: String::new(),
            reason: format!("failed to finish ZIP archive: {e}"),
        })
    }
}

impl<W: Write + Seek> EntrySink for ZipSink<W> {
    fn add_directory(&mut self, name: &str) -> Result<()> {
        self.writer
            .add_directory(name, self.options)
            .map_err(|e| ArchiveError::EntryWrite {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    fn start_file(&mut self, name: &str) -> Result<&mut dyn Write> {
        self.writer
            .start_file(name, self.options)
            .map_err(|e| ArchiveError::EntryWrite {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(&mut self.writer)
    }
}

/// Maps the configured level onto ZIP entry options.
fn file_options(config: &PackConfig) -> SimpleFileOptions {
    match config.compression_level {
        Some(0) => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
        level => {
            let level = level.unwrap_or(6);
            SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(i64::from(level)))
        }
    }
}

/// Reads entries from a ZIP container.
///
/// # Examples
///
/// ```no_run
/// use treezip_core::codec::EntrySource;
/// use treezip_core::codec::ZipSource;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut source = ZipSource::open("archive.zip")?;
/// for name in source.entry_names()? {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct ZipSource<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl ZipSource<BufReader<File>> {
    /// Opens the archive file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::ArchiveOpen` if the file cannot be opened or
    /// its central directory cannot be parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ArchiveError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::with_label(BufReader::new(file), path)
    }
}

impl<R: Read + Seek> ZipSource<R> {
    /// Reads the central directory from any seekable stream.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::ArchiveOpen` if the stream is not a ZIP archive.
    pub fn new(reader: R) -> Result<Self> {
        Self::with_label(reader, Path::new(STREAM_LABEL))
    }

    fn with_label(reader: R, label: &Path) -> Result<Self> {
        let archive = ZipArchive::new(reader).map_err(|e| ArchiveError::ArchiveOpen {
            path: label.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { archive })
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    fn info_at(&mut self, index: usize) -> Result<EntryInfo> {
        let file = self
            .archive
            .by_index_raw(index)
            .map_err(|e| ArchiveError::EntryRead {
                name: format!("#{index}"),
                reason: e.to_string(),
            })?;
        Ok(EntryInfo {
            name: file.name().to_string(),
            is_dir: file.is_dir(),
            size: file.size(),
            compressed_size: file.compressed_size(),
        })
    }
}

impl<R: Read + Seek> EntrySource for ZipSource<R> {
    fn entries(&mut self) -> Result<Vec<EntryInfo>> {
        (0..self.archive.len())
            .map(|index| self.info_at(index))
            .collect()
    }

    fn entry(&mut self, name: &str) -> Option<EntryInfo> {
        let index = self.archive.index_for_name(name)?;
        self.info_at(index).ok()
    }

    fn open_entry(&mut self, name: &str) -> Result<Box<dyn Read + '_>> {
        match self.archive.by_name(name) {
            Ok(file) => Ok(Box::new(file)),
            Err(ZipError::FileNotFound) => Err(ArchiveError::EntryNotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(ArchiveError::EntryRead {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn build(config: &PackConfig) -> Vec<u8> {
        let mut sink = ZipSink::new(Cursor::new(Vec::new()), config);
        sink.add_directory("pack/").unwrap();
        sink.start_file("pack/a.txt").unwrap().write_all(b"alpha").unwrap();
        sink.add_directory("pack/sub/").unwrap();
        sink.start_file("pack/sub/b.txt").unwrap().write_all(b"beta").unwrap();
        sink.finish().unwrap().into_inner()
    }

    #[test]
    fn test_entries_keep_archive_order() {
        let bytes = build(&PackConfig::default());
        let mut source = ZipSource::new(Cursor::new(bytes)).unwrap();

        assert_eq!(source.len(), 4);
        assert_eq!(
            source.entry_names().unwrap(),
            vec!["pack/", "pack/a.txt", "pack/sub/", "pack/sub/b.txt"]
        );

        let entries = source.entries().unwrap();
        assert!(entries[0].is_dir);
        assert!(!entries[1].is_dir);
        assert_eq!(entries[1].size, 5);
    }

    #[test]
    fn test_open_entry_reads_content() {
        let bytes = build(&PackConfig::default());
        let mut source = ZipSource::new(Cursor::new(bytes)).unwrap();

        let mut content = String::new();
        source
            .open_entry("pack/sub/b.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "beta");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let bytes = build(&PackConfig::default());
        let mut source = ZipSource::new(Cursor::new(bytes)).unwrap();

        assert!(source.entry("pack/a.txt").is_some());
        assert!(source.entry("PACK/A.TXT").is_none());
        assert!(matches!(
            source.open_entry("PACK/A.TXT"),
            Err(ArchiveError::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_stored_level_keeps_size() {
        let bytes = build(&PackConfig::default().with_compression_level(0));
        let mut source = ZipSource::new(Cursor::new(bytes)).unwrap();
        let info = source.entry("pack/a.txt").unwrap();
        assert_eq!(info.size, info.compressed_size);
    }

    #[test]
    fn test_new_rejects_garbage() {
        let result = ZipSource::new(Cursor::new(b"definitely not a zip".to_vec()));
        match result {
            Err(ArchiveError::ArchiveOpen { path, .. }) => {
                assert_eq!(path, Path::new(STREAM_LABEL));
            }
            _ => panic!("expected ArchiveOpen"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = ZipSource::open(temp.path().join("missing.zip"));
        assert!(matches!(result, Err(ArchiveError::ArchiveOpen { .. })));
    }

    #[test]
    fn test_create_in_missing_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = ZipSink::create(
            temp.path().join("no").join("such").join("out.zip"),
            &PackConfig::default(),
        );
        assert!(matches!(result, Err(ArchiveError::ArchiveOpen { .. })));
    }
}
