//! Subcommand implementations.

pub mod add;
pub mod completion;
pub mod extract;
pub mod list;
pub mod pack;
