//! Pack command implementation.

use crate::cli::PackArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use treezip_core::pack::EntryFilter;
use treezip_core::pack::PackConfig;
use treezip_core::pack::PatternFilter;
use treezip_core::pack::pack_directory;

pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    if args.archive.exists() && !args.force {
        bail!(
            "Archive '{}' already exists\n\
             HINT: Use --force to overwrite it.",
            args.archive.display()
        );
    }

    let mut config = PackConfig::new()
        .with_include_hidden(args.include_hidden)
        .with_follow_symlinks(!args.no_follow_symlinks)
        .with_emit_directories(!args.no_dir_entries)
        .with_sort_by_name(args.sort);
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    let patterns = (!args.exclude.is_empty()).then(|| {
        PatternFilter::new()
            .with_include_hidden(args.include_hidden)
            .with_exclude_patterns(args.exclude.clone())
    });
    let filter = patterns.as_ref().map(|f| f as &dyn EntryFilter);
    let prefix = args.prefix.as_deref().unwrap_or("");

    let report = add_archive_context(
        pack_directory(&args.source, &args.archive, prefix, filter, &config),
        &args.archive,
    )?;

    if report.total_entries() == 0 {
        formatter.format_warning(&format!(
            "No entries packed from '{}'; the archive is empty",
            args.source.display()
        ));
    }
    formatter.format_pack_result(&args.archive, &report)?;

    Ok(())
}
