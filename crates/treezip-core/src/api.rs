//! Sentinel-style convenience API.
//!
//! These wrappers collapse the `Result`-returning operations into plain
//! values: `false`, an empty list or `None` on failure. The discarded error is
//! logged at `warn` level. Use the [`pack`](crate::pack),
//! [`extract`](crate::extract) and [`list`](crate::list) modules directly when
//! the cause matters.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use treezip_core::api;
//!
//! if api::compress_dir(Path::new("site.zip"), Path::new("public"), "", None) {
//!     let extracted = api::extract_dir(Path::new("site.zip"), Path::new("mirror"));
//!     println!("{} paths restored", extracted.len());
//! }
//! ```

use crate::Result;
use crate::codec::ZipSink;
use crate::codec::ZipSource;
use crate::extract;
use crate::list;
use crate::pack;
use crate::pack::EntryFilter;
use crate::pack::PackConfig;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tracing::warn;

/// Packs `dir` into a new archive at `archive`.
///
/// Returns `false` if anything failed; the archive may then be incomplete.
pub fn compress_dir(
    archive: &Path,
    dir: &Path,
    prefix: &str,
    filter: Option<&dyn EntryFilter>,
) -> bool {
    let config = PackConfig::default();
    succeeded(
        "compress_dir",
        pack::pack_directory(dir, archive, prefix, filter, &config),
    )
}

/// Packs `dir` into a ZIP archive written to `writer`.
///
/// Returns `false` if anything failed.
pub fn compress_dir_to<W: Write + Seek>(
    writer: &mut W,
    dir: &Path,
    prefix: &str,
    filter: Option<&dyn EntryFilter>,
) -> bool {
    let config = PackConfig::default();
    succeeded(
        "compress_dir_to",
        pack_to_writer(writer, dir, prefix, filter, &config),
    )
}

fn pack_to_writer<W: Write + Seek>(
    writer: W,
    dir: &Path,
    prefix: &str,
    filter: Option<&dyn EntryFilter>,
    config: &PackConfig,
) -> Result<pack::PackReport> {
    let mut sink = ZipSink::new(writer, config);
    let report = pack::pack_directory_into(&mut sink, dir, prefix, filter, config)?;
    sink.finish()?;
    Ok(report)
}

/// Packs the listed files, each under its file name, into a new archive.
///
/// Returns `false` if anything failed.
pub fn compress_files<P: AsRef<Path>>(archive: &Path, files: &[P]) -> bool {
    succeeded(
        "compress_files",
        pack::pack_files(archive, files, &PackConfig::default()),
    )
}

/// Packs one file, under its file name, into a new archive.
///
/// Returns `false` if anything failed.
pub fn compress_file(archive: &Path, file: &Path) -> bool {
    succeeded(
        "compress_file",
        pack::pack_file(archive, file, &PackConfig::default()),
    )
}

/// Extracts the whole archive under `dest`.
///
/// Returns the materialized paths, or an empty list if anything failed.
/// Files written before the failure stay on disk.
pub fn extract_dir(archive: &Path, dest: &Path) -> Vec<PathBuf> {
    paths_or_empty("extract_dir", extract::extract_all(archive, dest))
}

/// Extracts the whole archive read from `reader` under `dest`.
pub fn extract_dir_from<R: Read + Seek>(reader: R, dest: &Path) -> Vec<PathBuf> {
    let result =
        ZipSource::new(reader).and_then(|mut source| extract::extract_all_from(&mut source, dest));
    paths_or_empty("extract_dir_from", result)
}

/// Extracts the named entries under `dest`.
///
/// Returns the materialized paths, or an empty list if any name is missing
/// or anything else failed.
pub fn extract_files<N: AsRef<str>>(archive: &Path, names: &[N], dest: &Path) -> Vec<PathBuf> {
    paths_or_empty(
        "extract_files",
        extract::extract_subset(archive, names, dest),
    )
}

/// Extracts the named entries of the archive read from `reader`.
pub fn extract_files_from<R: Read + Seek, N: AsRef<str>>(
    reader: R,
    names: &[N],
    dest: &Path,
) -> Vec<PathBuf> {
    let result = ZipSource::new(reader)
        .and_then(|mut source| extract::extract_subset_from(&mut source, names, dest));
    paths_or_empty("extract_files_from", result)
}

/// Extracts one entry to `dest_file`, or under the current directory.
///
/// Returns the path written, or `None` on failure.
pub fn extract_file(archive: &Path, name: &str, dest_file: Option<&Path>) -> Option<PathBuf> {
    logged("extract_file", extract::extract_entry(archive, name, dest_file))
}

/// Extracts one entry of the archive read from `reader`.
pub fn extract_file_from<R: Read + Seek>(
    reader: R,
    name: &str,
    dest_file: Option<&Path>,
) -> Option<PathBuf> {
    let result = ZipSource::new(reader)
        .and_then(|mut source| extract::extract_entry_from(&mut source, name, dest_file));
    logged("extract_file_from", result)
}

/// Lists entry names, or returns an empty list on failure.
pub fn file_list(archive: &Path) -> Vec<String> {
    logged("file_list", list::list_entries(archive)).unwrap_or_default()
}

/// Lists entry names of the archive read from `reader`.
pub fn file_list_from<R: Read + Seek>(reader: R) -> Vec<String> {
    let result = ZipSource::new(reader).and_then(|mut source| list::list_entries_from(&mut source));
    logged("file_list_from", result).unwrap_or_default()
}

fn logged<T>(operation: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(operation, error = %e, "archive operation failed");
            None
        }
    }
}

fn succeeded<T>(operation: &'static str, result: Result<T>) -> bool {
    logged(operation, result).is_some()
}

fn paths_or_empty(
    operation: &'static str,
    result: Result<extract::ExtractionReport>,
) -> Vec<PathBuf> {
    logged(operation, result)
        .map(extract::ExtractionReport::into_paths)
        .unwrap_or_default()
}
