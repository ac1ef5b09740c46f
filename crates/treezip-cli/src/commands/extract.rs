//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::env;
use treezip_core::extract::extract_all;
use treezip_core::extract::extract_subset;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let result = if args.entries.is_empty() {
        extract_all(&args.archive, &output_dir)
    } else {
        extract_subset(&args.archive, &args.entries, &output_dir)
    };
    let report = add_archive_context(result, &args.archive)?;

    formatter.format_extraction_result(&report)?;

    Ok(())
}
