//! Packing directory trees and file lists into archives.
//!
//! The packer walks a directory recursively, one level at a time, and emits
//! one archive entry per accepted file and directory. Entry names are
//! relative to the packed root, `/`-separated, and carry an optional prefix.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use treezip_core::pack::PackConfig;
//! use treezip_core::pack::PatternFilter;
//! use treezip_core::pack::pack_directory;
//!
//! let filter = PatternFilter::new().with_exclude_patterns(vec!["target".into()]);
//! let config = PackConfig::default().with_compression_level(9);
//!
//! let report = pack_directory(
//!     Path::new("my_crate"),
//!     Path::new("my_crate.zip"),
//!     "my_crate",
//!     Some(&filter),
//!     &config,
//! )?;
//! println!("{} entries", report.total_entries());
//! # Ok::<(), treezip_core::ArchiveError>(())
//! ```

mod config;
pub mod filters;
mod packer;
mod report;
pub mod walker;

pub use config::PackConfig;
pub use filters::EntryFilter;
pub use filters::PatternFilter;
pub use packer::pack_directory;
pub use packer::pack_directory_into;
pub use packer::pack_file;
pub use packer::pack_file_as;
pub use packer::pack_files;
pub use packer::pack_files_into;
pub use report::PackReport;
pub use walker::VisitedDirs;
