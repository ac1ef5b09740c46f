//! Pack directory trees into ZIP archives and extract them back.
//!
//! `treezip-core` walks a directory recursively and stores every accepted
//! file and directory as an archive entry named relative to the packed root,
//! optionally under a prefix. Extraction recreates the tree under a
//! destination directory and refuses entry names that would escape it.
//!
//! The `Result`-returning operations live in [`pack`], [`extract`] and
//! [`list`]. The [`api`] module wraps them into plain `bool` / `Vec` /
//! `Option` results for callers that only care whether it worked.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use treezip_core::extract::extract_all;
//! use treezip_core::pack::PackConfig;
//! use treezip_core::pack::pack_directory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::default();
//! let packed = pack_directory(Path::new("docs"), Path::new("docs.zip"), "docs", None, &config)?;
//! println!("Packed {} files", packed.files_added);
//!
//! let extracted = extract_all(Path::new("docs.zip"), Path::new("/tmp/restore"))?;
//! println!("Extracted {} files", extracted.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod codec;
pub mod copy;
pub mod error;
pub mod extract;
pub mod list;
pub mod pack;
#[doc(hidden)]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use codec::EntryInfo;
pub use error::ArchiveError;
pub use error::Result;
pub use extract::ExtractionReport;
pub use list::list_entries;
pub use list::list_entry_info;
pub use pack::EntryFilter;
pub use pack::PackConfig;
pub use pack::PackReport;

// Re-export types module for easier access
pub use types::DestDir;
pub use types::EntryName;
