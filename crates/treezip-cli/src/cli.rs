//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "treezip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack a directory tree into a new archive
    Pack(PackArgs),
    /// Pack individual files into a new archive, each under its file name
    Add(AddArgs),
    /// Extract archive contents
    Extract(ExtractArgs),
    /// List archive contents without extraction
    List(ListArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Output archive file path
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Directory to pack
    #[arg(value_name = "DIR")]
    pub source: PathBuf,

    /// Prefix prepended to every entry name
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Exclude pattern (glob, can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Include hidden files
    #[arg(long)]
    pub include_hidden: bool,

    /// Skip symbolic links instead of following them
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Do not write entries for directories (empty directories are lost)
    #[arg(long)]
    pub no_dir_entries: bool,

    /// Add directory children in name order
    #[arg(long)]
    pub sort: bool,

    /// Compression level (0 = store, 1-9 = deflate)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Overwrite output file if exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct AddArgs {
    /// Output archive file path
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Files to pack
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Compression level (0 = store, 1-9 = deflate)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Overwrite output file if exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Extract only this entry (exact name, can be repeated)
    #[arg(short, long = "entry", value_name = "NAME")]
    pub entries: Vec<String>,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Show detailed file information
    #[arg(short, long)]
    pub long: bool,

    /// Show sizes in human-readable format
    #[arg(short = 'H', long)]
    pub human_readable: bool,
}
