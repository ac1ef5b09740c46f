//! Directory and file-list packing.
//!
//! Every operation comes in two shapes: one that creates the archive file,
//! packs, and finishes it, and an `_into` variant that writes into a sink
//! owned by the caller, who finishes it.

use crate::ArchiveError;
use crate::Result;
use crate::codec::EntrySink;
use crate::codec::ZipSink;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::pack::EntryFilter;
use crate::pack::PackConfig;
use crate::pack::PackReport;
use crate::pack::filters;
use crate::pack::walker::Child;
use crate::pack::walker::EntryKind;
use crate::pack::walker::VisitedDirs;
use crate::pack::walker::read_children;
use crate::types::EntryName;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Packs the tree under `source_root` into a new archive at `archive_path`.
///
/// An existing archive file is truncated. With a non-empty `prefix`, every
/// entry name starts with `prefix/`. With a `filter`, each child name is
/// packed iff the filter accepts it; without one, hidden names are skipped
/// unless `config.include_hidden` is set.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use treezip_core::pack::PackConfig;
/// use treezip_core::pack::pack_directory;
///
/// let no_logs = |name: &str| !name.ends_with(".log");
/// let report = pack_directory(
///     Path::new("project"),
///     Path::new("project.zip"),
///     "project",
///     Some(&no_logs),
///     &PackConfig::default(),
/// )?;
/// println!("packed {} files", report.files_added);
/// # Ok::<(), treezip_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `source_root` does not exist or is not a directory
/// - the archive file cannot be created
/// - a file cannot be read or its entry cannot be written
///
/// A partially written archive is left in place on failure. When the
/// archive lies inside `source_root` it is not packed into itself.
pub fn pack_directory(
    source_root: &Path,
    archive_path: &Path,
    prefix: &str,
    filter: Option<&dyn EntryFilter>,
    config: &PackConfig,
) -> Result<PackReport> {
    check_directory(source_root)?;
    with_archive(archive_path, config, |sink| {
        let own_archive = archive_path.canonicalize()?;
        pack_tree(sink, source_root, prefix, filter, config, Some(own_archive))
    })
}

/// Packs the tree under `source_root` into a sink owned by the caller.
///
/// The sink is not finished; further entries may be added afterwards.
///
/// # Errors
///
/// Same as [`pack_directory`], minus archive creation.
pub fn pack_directory_into<S: EntrySink + ?Sized>(
    sink: &mut S,
    source_root: &Path,
    prefix: &str,
    filter: Option<&dyn EntryFilter>,
    config: &PackConfig,
) -> Result<PackReport> {
    pack_tree(sink, source_root, prefix, filter, config, None)
}

fn pack_tree<S: EntrySink + ?Sized>(
    sink: &mut S,
    source_root: &Path,
    prefix: &str,
    filter: Option<&dyn EntryFilter>,
    config: &PackConfig,
    own_archive: Option<PathBuf>,
) -> Result<PackReport> {
    check_directory(source_root)?;

    let start = Instant::now();
    let mut packer = DirPacker {
        sink,
        root: source_root,
        prefix,
        filter,
        config,
        own_archive,
        visited: VisitedDirs::new(),
        buffer: CopyBuffer::new(),
        report: PackReport::new(),
    };
    packer.visited.enter(source_root)?;
    packer.pack_dir(source_root)?;

    let mut report = packer.report;
    report.duration = start.elapsed();
    debug!(
        root = %source_root.display(),
        files = report.files_added,
        directories = report.directories_added,
        skipped = report.directories_skipped,
        "packed directory"
    );
    Ok(report)
}

/// Packs an explicit list of files into a new archive.
///
/// Each file is stored under its own file name, without its directory part,
/// so two inputs sharing a file name (`a/x.txt`, `b/x.txt`) cannot both be
/// packed. All inputs are checked before the archive is created.
///
/// # Errors
///
/// Returns `ArchiveError::SourceNotFound` or `ArchiveError::NotAFile` for a
/// bad path, `ArchiveError::DuplicateEntry` for a repeated file name, plus
/// the archive and entry errors of [`pack_directory`].
pub fn pack_files<P: AsRef<Path>>(
    archive_path: &Path,
    files: &[P],
    config: &PackConfig,
) -> Result<PackReport> {
    flat_entry_names(files)?;
    with_archive(archive_path, config, |sink| pack_files_into(sink, files))
}

/// Packs an explicit list of files into a sink owned by the caller.
///
/// Nothing is written unless every input passes the checks of
/// [`pack_files`].
///
/// # Errors
///
/// Same as [`pack_files`], minus archive creation.
pub fn pack_files_into<S: EntrySink + ?Sized, P: AsRef<Path>>(
    sink: &mut S,
    files: &[P],
) -> Result<PackReport> {
    let start = Instant::now();
    let mut buffer = CopyBuffer::new();
    let mut report = PackReport::new();

    let names = flat_entry_names(files)?;
    for (file, name) in files.iter().zip(names) {
        let bytes = write_file_entry(sink, file.as_ref(), &name, &mut buffer)?;
        report.record_file(name, bytes);
    }

    report.duration = start.elapsed();
    Ok(report)
}

/// Packs a single file into a new archive, stored under its file name.
///
/// # Errors
///
/// Same as [`pack_files`].
pub fn pack_file(archive_path: &Path, file: &Path, config: &PackConfig) -> Result<PackReport> {
    pack_files(archive_path, &[file], config)
}

/// Packs a single file into a caller-owned sink under `entry_name`.
///
/// The name is used verbatim.
///
/// # Errors
///
/// Returns `ArchiveError::SourceNotFound` or `ArchiveError::NotAFile` for a
/// bad path and `ArchiveError::EntryWrite` if the copy fails.
pub fn pack_file_as<S: EntrySink + ?Sized>(
    sink: &mut S,
    file: &Path,
    entry_name: &str,
) -> Result<PackReport> {
    check_file(file)?;

    let start = Instant::now();
    let mut report = PackReport::new();
    let name = EntryName::new(entry_name);
    let bytes = write_file_entry(sink, file, &name, &mut CopyBuffer::new())?;
    report.record_file(name, bytes);
    report.duration = start.elapsed();
    Ok(report)
}

/// Creates the archive, runs `pack`, then finishes and flushes the file.
fn with_archive<F>(archive_path: &Path, config: &PackConfig, pack: F) -> Result<PackReport>
where
    F: FnOnce(&mut ZipSink<BufWriter<File>>) -> Result<PackReport>,
{
    config.validate()?;

    let start = Instant::now();
    let mut sink = ZipSink::create(archive_path, config)?;
    let mut report = pack(&mut sink)?;
    sink.finish()?.flush().map_err(|e| ArchiveError::ArchiveOpen {
        path: archive_path.to_path_buf(),
        reason: format!("failed to flush archive: {e}"),
    })?;

    report.duration = start.elapsed();
    Ok(report)
}

/// Streams one file into a new entry and returns the byte count.
fn write_file_entry<S: EntrySink + ?Sized>(
    sink: &mut S,
    path: &Path,
    name: &EntryName,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    let entry_error = |e: std::io::Error| ArchiveError::EntryWrite {
        name: name.to_string(),
        reason: e.to_string(),
    };

    let mut file = File::open(path).map_err(entry_error)?;
    let writer = sink.start_file(name.as_str())?;
    let bytes = copy_with_buffer(&mut file, writer, buffer).map_err(entry_error)?;
    debug!(entry = %name, bytes, "packed file");
    Ok(bytes)
}

/// Names each input by its file name, rejecting bad paths and repeats.
fn flat_entry_names<P: AsRef<Path>>(files: &[P]) -> Result<Vec<EntryName>> {
    let mut seen = HashSet::new();
    files
        .iter()
        .map(|file| {
            let file = file.as_ref();
            check_file(file)?;
            let file_name = file.file_name().ok_or_else(|| ArchiveError::NotAFile {
                path: file.to_path_buf(),
            })?;
            let name = EntryName::join("", &file_name.to_string_lossy(), false);
            if !seen.insert(name.as_str().to_owned()) {
                return Err(ArchiveError::DuplicateEntry {
                    name: name.into_string(),
                    path: file.to_path_buf(),
                });
            }
            Ok(name)
        })
        .collect()
}

fn check_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ArchiveError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ArchiveError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn check_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ArchiveError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(ArchiveError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// State of one recursive directory pack.
struct DirPacker<'a, S: EntrySink + ?Sized> {
    sink: &'a mut S,
    root: &'a Path,
    prefix: &'a str,
    filter: Option<&'a dyn EntryFilter>,
    config: &'a PackConfig,
    /// Canonical path of the archive being written, never packed.
    own_archive: Option<PathBuf>,
    visited: VisitedDirs,
    buffer: CopyBuffer,
    report: PackReport,
}

impl<S: EntrySink + ?Sized> DirPacker<'_, S> {
    fn pack_dir(&mut self, dir: &Path) -> Result<()> {
        for child in read_children(dir, self.config)? {
            if !self.accepts(&child) {
                debug!(path = %child.path.display(), "filtered out");
                self.report.items_filtered += 1;
                continue;
            }

            match child.kind {
                EntryKind::Directory => {
                    if !self.visited.enter(&child.path)? {
                        debug!(path = %child.path.display(), "already packed, skipping");
                        self.report.directories_skipped += 1;
                        continue;
                    }
                    if self.config.emit_directories {
                        let name =
                            EntryName::from_native(self.root, &child.path, self.prefix, true)?;
                        self.sink.add_directory(name.as_str())?;
                        debug!(entry = %name, "packed directory");
                        self.report.record_directory(name);
                    }
                    self.pack_dir(&child.path)?;
                }
                EntryKind::File if self.is_own_archive(&child.path) => {
                    debug!(path = %child.path.display(), "skipping the archive being written");
                    self.report.items_filtered += 1;
                }
                EntryKind::File => {
                    let name =
                        EntryName::from_native(self.root, &child.path, self.prefix, false)?;
                    let bytes =
                        write_file_entry(&mut *self.sink, &child.path, &name, &mut self.buffer)?;
                    self.report.record_file(name, bytes);
                }
            }
        }
        Ok(())
    }

    fn is_own_archive(&self, path: &Path) -> bool {
        self.own_archive
            .as_deref()
            .is_some_and(|own| path.canonicalize().is_ok_and(|p| p == own))
    }

    fn accepts(&self, child: &Child) -> bool {
        match self.filter {
            Some(filter) => filter.matches(&child.name),
            None => self.config.include_hidden || !filters::is_hidden(&child.name),
        }
    }
}
