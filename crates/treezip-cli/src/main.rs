//! treezip CLI - Command-line utility for packing directory trees into ZIP
//! archives and extracting them back.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    let result = match &cli.command {
        cli::Commands::Pack(args) => commands::pack::execute(args, &*formatter),
        cli::Commands::Add(args) => commands::add::execute(args, &*formatter),
        cli::Commands::Extract(args) => commands::extract::execute(args, &*formatter),
        cli::Commands::List(args) => commands::list::execute(args, &*formatter),
        cli::Commands::Completion { shell } => {
            commands::completion::execute(*shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        formatter.format_error(&e);
        process::exit(1);
    }
}

/// Logs go to stderr so that `--json` output on stdout stays parseable.
///
/// `RUST_LOG` overrides the level picked from `--verbose` / `--quiet`.
fn setup_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
