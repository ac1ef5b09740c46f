//! Archive extraction to the filesystem.

use crate::ArchiveError;
use crate::Result;
use crate::codec::EntrySource;
use crate::codec::ZipSource;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::extract::ExtractionReport;
use crate::types::DestDir;
use crate::types::EntryName;
use crate::types::create_dir_chain;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Extracts every entry of the archive at `archive_path` under `dest`.
///
/// `dest` is created if missing. Existing files are overwritten.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use treezip_core::extract::extract_all;
///
/// let report = extract_all(Path::new("project.zip"), Path::new("out"))?;
/// for path in &report.paths {
///     println!("{}", path.display());
/// }
/// # Ok::<(), treezip_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns the first error hit. Files extracted before it stay on disk; the
/// partially written file of the failing entry is removed.
pub fn extract_all(archive_path: &Path, dest: &Path) -> Result<ExtractionReport> {
    let mut source = ZipSource::open(archive_path)?;
    extract_all_from(&mut source, dest)
}

/// Extracts every entry of a caller-owned source under `dest`.
///
/// # Errors
///
/// Same as [`extract_all`].
pub fn extract_all_from<S: EntrySource + ?Sized>(
    source: &mut S,
    dest: &Path,
) -> Result<ExtractionReport> {
    let names = source.entry_names()?;
    extract_subset_from(source, &names, dest)
}

/// Extracts the named entries, in the order given, under `dest`.
///
/// Names are matched exactly and case-sensitively.
///
/// # Errors
///
/// Returns `ArchiveError::EntryNotFound` for the first unknown name, before
/// anything is written for it, plus the errors of [`extract_all`].
pub fn extract_subset<N: AsRef<str>>(
    archive_path: &Path,
    names: &[N],
    dest: &Path,
) -> Result<ExtractionReport> {
    let mut source = ZipSource::open(archive_path)?;
    extract_subset_from(&mut source, names, dest)
}

/// Extracts the named entries of a caller-owned source under `dest`.
///
/// # Errors
///
/// Same as [`extract_subset`].
pub fn extract_subset_from<S: EntrySource + ?Sized, N: AsRef<str>>(
    source: &mut S,
    names: &[N],
    dest: &Path,
) -> Result<ExtractionReport> {
    let start = Instant::now();
    let dest = DestDir::create(dest)?;
    let mut buffer = CopyBuffer::new();
    let mut report = ExtractionReport::new();

    for name in names {
        let name = EntryName::new(name.as_ref());
        let is_dir = lookup_is_dir(source, &name)?;
        let target = dest.resolve(&name)?;

        if target.as_path() == dest.as_path() {
            debug!(entry = %name, "entry names the destination itself");
            continue;
        }
        if is_dir {
            create_dir_chain(&target)?;
            debug!(entry = %name, path = %target.display(), "created directory");
            report.record_directory(&target);
        } else {
            let bytes = extract_to(source, &name, &target, &mut buffer)?;
            report.record_file(&target, bytes);
        }
    }

    report.duration = start.elapsed();
    debug!(
        dest = %dest.as_path().display(),
        files = report.files_extracted,
        directories = report.directories_created,
        "extraction complete"
    );
    Ok(report)
}

/// Extracts one entry to `dest_file`.
///
/// Without an explicit `dest_file`, the entry name is resolved under the
/// current directory with the usual traversal checks. An explicit path is
/// used as given. Returns the path written.
///
/// # Errors
///
/// Returns `ArchiveError::EntryNotFound` for an unknown name, plus the
/// errors of [`extract_all`].
pub fn extract_entry(
    archive_path: &Path,
    name: &str,
    dest_file: Option<&Path>,
) -> Result<PathBuf> {
    let mut source = ZipSource::open(archive_path)?;
    extract_entry_from(&mut source, name, dest_file)
}

/// Extracts one entry of a caller-owned source to `dest_file`.
///
/// # Errors
///
/// Same as [`extract_entry`].
pub fn extract_entry_from<S: EntrySource + ?Sized>(
    source: &mut S,
    name: &str,
    dest_file: Option<&Path>,
) -> Result<PathBuf> {
    let name = EntryName::new(name);
    let is_dir = lookup_is_dir(source, &name)?;
    let target = match dest_file {
        Some(path) => path.to_path_buf(),
        None => DestDir::create("")?.resolve(&name)?,
    };

    if is_dir {
        create_dir_chain(&target)?;
    } else {
        extract_to(source, &name, &target, &mut CopyBuffer::new())?;
    }
    Ok(target)
}

/// Removes every path in `paths`, continuing past failures.
///
/// Returns `true` if every removal succeeded.
///
/// # Examples
///
/// ```no_run
/// use treezip_core::extract::extract_all;
/// use treezip_core::extract::remove_files;
/// use std::path::Path;
///
/// let report = extract_all(Path::new("a.zip"), Path::new("scratch"))?;
/// let files: Vec<_> = report.paths.iter().filter(|p| p.is_file()).collect();
/// assert!(remove_files(&files));
/// # Ok::<(), treezip_core::ArchiveError>(())
/// ```
pub fn remove_files<P: AsRef<Path>>(paths: &[P]) -> bool {
    let mut all_removed = true;
    for path in paths {
        let path = path.as_ref();
        if let Err(e) = std::fs::remove_file(path) {
            debug!(path = %path.display(), error = %e, "failed to remove file");
            all_removed = false;
        }
    }
    all_removed
}

fn lookup_is_dir<S: EntrySource + ?Sized>(source: &mut S, name: &EntryName) -> Result<bool> {
    source
        .entry(name.as_str())
        .map(|info| info.is_dir)
        .ok_or_else(|| ArchiveError::EntryNotFound {
            name: name.to_string(),
        })
}

/// Writes one file entry to `target`, creating its parent chain.
///
/// A target left incomplete by a failed copy is removed.
fn extract_to<S: EntrySource + ?Sized>(
    source: &mut S,
    name: &EntryName,
    target: &Path,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_chain(parent)?;
    }

    let mut reader = source.open_entry(name.as_str())?;
    let mut file = File::create(target).map_err(|e| {
        ArchiveError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to create {}: {e}", target.display()),
        ))
    })?;

    let copied = copy_with_buffer(&mut reader, &mut file, buffer).and_then(|bytes| {
        file.flush()?;
        Ok(bytes)
    });

    match copied {
        Ok(bytes) => {
            debug!(entry = %name, path = %target.display(), bytes, "extracted file");
            Ok(bytes)
        }
        Err(e) => {
            drop(file);
            if let Err(remove_err) = std::fs::remove_file(target) {
                debug!(
                    path = %target.display(),
                    error = %remove_err,
                    "failed to remove partial file"
                );
            }
            Err(ArchiveError::EntryRead {
                name: name.to_string(),
                reason: e.to_string(),
            })
        }
    }
}
