//! Add command implementation: packs individual files by file name.

use crate::cli::AddArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use treezip_core::pack::PackConfig;
use treezip_core::pack::pack_files;

pub fn execute(args: &AddArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    if args.archive.exists() && !args.force {
        bail!(
            "Archive '{}' already exists\n\
             HINT: Use --force to overwrite it.",
            args.archive.display()
        );
    }

    let mut config = PackConfig::new();
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    let report = add_archive_context(
        pack_files(&args.archive, &args.files, &config),
        &args.archive,
    )?;

    formatter.format_pack_result(&args.archive, &report)?;

    Ok(())
}
