//! Archive listing.
//!
//! Listing is read-only: nothing is written to disk and no entry data is
//! decompressed.

use crate::Result;
use crate::codec::EntryInfo;
use crate::codec::EntrySource;
use crate::codec::ZipSource;
use std::path::Path;

/// Lists the entry names of the archive at `archive_path`.
///
/// Names are returned verbatim, in archive order.
///
/// # Errors
///
/// Returns `ArchiveError::ArchiveOpen` if the archive cannot be opened and
/// `ArchiveError::EntryRead` if its index is corrupt.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use treezip_core::list_entries;
///
/// for name in list_entries(Path::new("archive.zip"))? {
///     println!("{name}");
/// }
/// # Ok::<(), treezip_core::ArchiveError>(())
/// ```
pub fn list_entries(archive_path: &Path) -> Result<Vec<String>> {
    let mut source = ZipSource::open(archive_path)?;
    list_entries_from(&mut source)
}

/// Lists the entry names of a caller-owned source.
///
/// # Errors
///
/// Returns `ArchiveError::EntryRead` if the index cannot be read.
pub fn list_entries_from<S: EntrySource + ?Sized>(source: &mut S) -> Result<Vec<String>> {
    source.entry_names()
}

/// Lists name, kind and sizes of every entry of the archive at `archive_path`.
///
/// # Errors
///
/// Same as [`list_entries`].
pub fn list_entry_info(archive_path: &Path) -> Result<Vec<EntryInfo>> {
    ZipSource::open(archive_path)?.entries()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ArchiveError;
    use crate::test_utils::ZipTestBuilder;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn sample() -> Vec<u8> {
        ZipTestBuilder::new()
            .add_directory("pack/")
            .add_file("pack/a.txt", b"alpha")
            .add_file("pack/../odd name.txt", b"kept verbatim")
            .build()
    }

    #[test]
    fn test_list_entries_from_verbatim() {
        let mut source = ZipSource::new(Cursor::new(sample())).unwrap();

        let names = list_entries_from(&mut source).unwrap();

        assert_eq!(names, vec!["pack/", "pack/a.txt", "pack/../odd name.txt"]);
    }

    #[test]
    fn test_list_entry_info() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("sample.zip");
        std::fs::write(&archive, sample()).unwrap();

        let infos = list_entry_info(&archive).unwrap();

        assert_eq!(infos.len(), 3);
        assert!(infos[0].is_dir);
        assert_eq!(infos[1].name, "pack/a.txt");
        assert_eq!(infos[1].size, 5);
        assert_eq!(list_entries(&archive).unwrap().len(), 3);
    }

    #[test]
    fn test_list_does_not_touch_disk() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("sample.zip");
        std::fs::write(&archive, sample()).unwrap();

        list_entries(&archive).unwrap();

        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_list_missing_archive() {
        let temp = TempDir::new().unwrap();

        let result = list_entries(&temp.path().join("nope.zip"));

        assert!(matches!(result, Err(ArchiveError::ArchiveOpen { .. })));
    }
}
