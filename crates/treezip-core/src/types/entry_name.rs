//! Archive-internal entry names.

use crate::ArchiveError;
use crate::Result;
use std::fmt;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Separator used inside archive entry names, independent of the host.
pub const SEPARATOR: char = '/';

/// Name of an entry inside an archive.
///
/// Names produced by the packer are normalized: components are joined with
/// `/`, there is no leading separator, and directory entries end with `/`.
/// Names read back from an archive are kept verbatim and only checked when
/// they are turned into a native path with [`EntryName::to_relative_path`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use treezip_core::types::EntryName;
///
/// let root = Path::new("/data/project");
/// let name = EntryName::from_native(root, &root.join("src").join("main.rs"), "pack", false)?;
/// assert_eq!(name.as_str(), "pack/src/main.rs");
///
/// let dir = EntryName::from_native(root, &root.join("src"), "", true)?;
/// assert_eq!(dir.as_str(), "src/");
/// assert!(dir.is_dir());
/// # Ok::<(), treezip_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryName(String);

impl EntryName {
    /// Wraps a raw entry name as stored in an archive.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds the entry name for `path`, which must live under `root`.
    ///
    /// The relative part is joined with `/`, `prefix` (trailing separators
    /// trimmed) is prepended with a separator when non-empty, and a trailing
    /// `/` marks directories.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::OutsideRoot` if `path` is not under `root` or
    /// its relative part contains anything other than plain components.
    pub fn from_native(root: &Path, path: &Path, prefix: &str, is_dir: bool) -> Result<Self> {
        let outside = || ArchiveError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        };

        let relative = path.strip_prefix(root).map_err(|_| outside())?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(outside());
                }
            }
        }

        Ok(Self::join(prefix, &segments.join("/"), is_dir))
    }

    /// Joins a prefix and an already `/`-separated relative name.
    ///
    /// # Examples
    ///
    /// ```
    /// use treezip_core::types::EntryName;
    ///
    /// assert_eq!(EntryName::join("pack", "a.txt", false).as_str(), "pack/a.txt");
    /// assert_eq!(EntryName::join("pack/", "sub", true).as_str(), "pack/sub/");
    /// assert_eq!(EntryName::join("", "a.txt", false).as_str(), "a.txt");
    /// ```
    #[must_use]
    pub fn join(prefix: &str, relative: &str, is_dir: bool) -> Self {
        let prefix = prefix.trim_end_matches(SEPARATOR);
        let relative = relative.trim_start_matches(SEPARATOR);

        let mut name = String::with_capacity(prefix.len() + relative.len() + 2);
        if !prefix.is_empty() {
            name.push_str(prefix);
            if !relative.is_empty() {
                name.push(SEPARATOR);
            }
        }
        name.push_str(relative);
        if is_dir && !name.is_empty() && !name.ends_with(SEPARATOR) {
            name.push(SEPARATOR);
        }
        Self(name)
    }

    /// Returns `true` if the name denotes a directory entry.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.0.ends_with(SEPARATOR)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Converts the name into a relative native path.
    ///
    /// Empty and `.` segments are dropped. Anything that could resolve
    /// outside the directory it is joined to is rejected. A directory name
    /// made only of such segments (`./`) yields an empty path, meaning the
    /// directory itself.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::PathTraversal` if the name contains a `..`
    /// segment, starts with a separator, carries a drive or UNC prefix,
    /// contains a NUL byte, or is a file name with no usable segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use treezip_core::types::EntryName;
    ///
    /// let path = EntryName::new("pack/sub/b.txt").to_relative_path()?;
    /// assert_eq!(path, PathBuf::from("pack").join("sub").join("b.txt"));
    ///
    /// assert!(EntryName::new("../evil.txt").to_relative_path().is_err());
    /// assert!(EntryName::new("/etc/passwd").to_relative_path().is_err());
    /// # Ok::<(), treezip_core::ArchiveError>(())
    /// ```
    pub fn to_relative_path(&self) -> Result<PathBuf> {
        let traversal = || ArchiveError::PathTraversal {
            path: PathBuf::from(&self.0),
        };

        if self.0.starts_with(SEPARATOR) || self.0.contains('\0') {
            return Err(traversal());
        }

        let mut path = PathBuf::new();
        for segment in self.0.split(SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => return Err(traversal()),
                _ => {
                    if cfg!(windows) && segment.contains('\\') {
                        return Err(traversal());
                    }
                    let mut components = Path::new(segment).components();
                    match (components.next(), components.next()) {
                        (Some(Component::Normal(part)), None) => path.push(part),
                        _ => return Err(traversal()),
                    }
                }
            }
        }

        if path.as_os_str().is_empty() && !self.is_dir() {
            return Err(traversal());
        }

        Ok(path)
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for EntryName {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
