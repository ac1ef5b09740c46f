//! Validated extraction root.

use crate::ArchiveError;
use crate::Result;
use crate::types::EntryName;
use std::path::Path;
use std::path::PathBuf;

/// Destination directory for extraction, held as a canonical path.
///
/// Every native path handed out by [`DestDir::resolve`] is guaranteed to lie
/// under this directory at the time of the call.
///
/// # Examples
///
/// ```no_run
/// use treezip_core::types::DestDir;
/// use treezip_core::types::EntryName;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create("/tmp/out")?;
/// let path = dest.resolve(&EntryName::new("docs/readme.txt"))?;
/// assert!(path.starts_with(dest.as_path()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Wraps an existing directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist, is not a directory, or
    /// cannot be canonicalized.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Err(ArchiveError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("destination directory does not exist: {}", path.display()),
            )));
        }

        if !path.is_dir() {
            return Err(ArchiveError::NotADirectory { path });
        }

        let canonical = path.canonicalize().map_err(|e| {
            ArchiveError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to canonicalize path {}: {e}", path.display()),
            ))
        })?;

        Ok(Self(canonical))
    }

    /// Creates the directory (and its parents) if missing, then wraps it.
    ///
    /// An empty path means the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::DirectoryCreation` if the directory cannot be
    /// created, or any error from [`DestDir::new`].
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = if path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            path
        };

        create_dir_chain(path)?;
        Self::new(path)
    }

    /// Returns the canonical path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Maps an entry name to the native path it extracts to.
    ///
    /// The name is converted with [`EntryName::to_relative_path`] and joined
    /// under this directory. If the parent of the target already exists it
    /// is canonicalized and must still be inside the destination, which
    /// catches symlinked directories pointing elsewhere. A directory name
    /// such as `./` resolves to the destination itself.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::PathTraversal` if the target would escape the
    /// destination.
    pub fn resolve(&self, name: &EntryName) -> Result<PathBuf> {
        let relative = name.to_relative_path()?;
        if relative.as_os_str().is_empty() {
            return Ok(self.0.clone());
        }
        let resolved = self.0.join(&relative);

        // Nearest existing ancestor decides; missing components below it are
        // created later by the extractor and cannot redirect anything.
        let mut ancestor = resolved.parent();
        while let Some(dir) = ancestor {
            match dir.canonicalize() {
                Ok(canonical) => {
                    if !canonical.starts_with(&self.0) {
                        return Err(ArchiveError::PathTraversal {
                            path: PathBuf::from(name.as_str()),
                        });
                    }
                    break;
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => ancestor = dir.parent(),
                Err(e) => return Err(ArchiveError::Io(e)),
            }
        }

        // An existing symlink at the target itself would be followed on write.
        let escapes_via_link = resolved
            .symlink_metadata()
            .is_ok_and(|meta| meta.file_type().is_symlink())
            && !resolved
                .canonicalize()
                .is_ok_and(|target| target.starts_with(&self.0));

        if escapes_via_link || !resolved.starts_with(&self.0) {
            return Err(ArchiveError::PathTraversal {
                path: PathBuf::from(name.as_str()),
            });
        }

        Ok(resolved)
    }
}

impl AsRef<Path> for DestDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Creates `path` and every missing ancestor; existing directories are fine.
///
/// # Errors
///
/// Returns `ArchiveError::DirectoryCreation` when a component cannot be
/// created, for example because a regular file already has that name.
pub fn create_dir_chain(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| ArchiveError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })
}
