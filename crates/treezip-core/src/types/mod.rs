//! Path normalization types shared by packing and extraction.
//!
//! - [`EntryName`]: archive-internal, `/`-separated entry name
//! - [`DestDir`]: canonical extraction root that resolves entry names to
//!   native paths without escaping it

mod dest_dir;
mod entry_name;

pub use dest_dir::DestDir;
pub use dest_dir::create_dir_chain;
pub use entry_name::EntryName;
pub use entry_name::SEPARATOR;
