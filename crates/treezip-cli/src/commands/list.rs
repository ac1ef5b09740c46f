//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use treezip_core::list_entry_info;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let entries = add_archive_context(list_entry_info(&args.archive), &args.archive)?;

    if args.long {
        formatter.format_entries_long(&entries, args.human_readable)?;
    } else {
        formatter.format_entries_short(&entries)?;
    }

    Ok(())
}
