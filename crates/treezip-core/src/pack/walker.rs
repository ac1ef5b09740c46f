//! Directory enumeration for the packer.
//!
//! The packer recurses itself, one directory level at a time, so that the
//! set of directories already entered can be threaded through the
//! recursion explicitly. This module provides that set and the per-level
//! child listing.

use crate::ArchiveError;
use crate::Result;
use crate::pack::PackConfig;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Canonical paths of the directories entered during one packing run.
///
/// A directory reached twice, through a symlink cycle or two links to the
/// same place, is only packed the first time.
///
/// # Examples
///
/// ```no_run
/// use treezip_core::pack::VisitedDirs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut visited = VisitedDirs::new();
/// assert!(visited.enter("/data/project".as_ref())?);
/// assert!(!visited.enter("/data/project/.".as_ref())?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct VisitedDirs {
    seen: HashSet<PathBuf>,
}

impl VisitedDirs {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `dir` by its canonical path.
    ///
    /// Returns `true` if the directory had not been entered before.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be canonicalized.
    pub fn enter(&mut self, dir: &Path) -> Result<bool> {
        let canonical = dir.canonicalize().map_err(|e| {
            ArchiveError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to canonicalize {}: {e}", dir.display()),
            ))
        })?;
        Ok(self.seen.insert(canonical))
    }

    /// Returns `true` if `dir` resolves to a directory already entered.
    #[must_use]
    pub fn contains(&self, dir: &Path) -> bool {
        dir.canonicalize()
            .is_ok_and(|canonical| self.seen.contains(&canonical))
    }

    /// Number of distinct directories entered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing has been entered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Kind of a packable directory child, after resolving symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,

    /// Directory.
    Directory,
}

/// One direct child of a directory being packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    /// Path of the child, under the directory that was listed.
    pub path: PathBuf,

    /// File name of the child, as handed to filters.
    pub name: String,

    /// File or directory.
    pub kind: EntryKind,
}

/// Lists the files and directories directly inside `dir`.
///
/// Symbolic links are resolved when `config.follow_symlinks` is set and
/// skipped otherwise; dangling links and special files are always skipped.
/// Order is the filesystem's unless `config.sort_by_name` is set.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn read_children(dir: &Path, config: &PackConfig) -> Result<Vec<Child>> {
    let mut walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);
    if config.sort_by_name {
        walker = walker.sort_by_file_name();
    }

    let mut children = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            ArchiveError::Io(std::io::Error::other(format!("walkdir error: {e}")))
        })?;

        let file_type = entry.file_type();
        let kind = if file_type.is_symlink() {
            if !config.follow_symlinks {
                debug!(path = %entry.path().display(), "skipping symlink");
                continue;
            }
            match std::fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                Ok(meta) if meta.is_file() => EntryKind::File,
                Ok(_) => continue,
                Err(e) => {
                    debug!(path = %entry.path().display(), error = %e, "skipping dangling symlink");
                    continue;
                }
            }
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            continue;
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        children.push(Child {
            path: entry.into_path(),
            name,
            kind,
        });
    }

    Ok(children)
}
