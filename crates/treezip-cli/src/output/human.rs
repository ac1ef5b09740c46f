//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use treezip_core::EntryInfo;
use treezip_core::ExtractionReport;
use treezip_core::PackReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn write_header(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, archive: &Path, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_header(&format!("Archive created: {}", archive.display()));

        if self.verbose {
            for name in &report.entries {
                let _ = self.term.write_line(&format!("  + {name}"));
            }
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "  Files added:      {}",
            Self::format_number(report.files_added)
        ));
        let _ = self.term.write_line(&format!(
            "  Directories:      {}",
            Self::format_number(report.directories_added)
        ));
        let _ = self.term.write_line(&format!(
            "  Total size:       {}",
            Self::format_size(report.bytes_written)
        ));

        if report.items_filtered > 0 {
            let _ = self.term.write_line(&format!(
                "  Filtered out:     {}",
                Self::format_number(report.items_filtered)
            ));
        }
        if report.directories_skipped > 0 {
            let _ = self.term.write_line(&format!(
                "  Revisits skipped: {}",
                Self::format_number(report.directories_skipped)
            ));
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration:         {:?}", report.duration));
        }

        Ok(())
    }

    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_header("Extraction complete");

        if self.verbose {
            for path in &report.paths {
                let _ = self.term.write_line(&format!("  {}", path.display()));
            }
        }

        let _ = self
            .term
            .write_line(&format!("  Files extracted: {}", report.files_extracted));
        let _ = self
            .term
            .write_line(&format!("  Directories: {}", report.directories_created));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_entries_short(&self, entries: &[EntryInfo]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in entries {
            let _ = self.term.write_line(&entry.name);
        }

        Ok(())
    }

    fn format_entries_long(&self, entries: &[EntryInfo], human_readable: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut files = 0;
        let mut total_size = 0;
        for entry in entries {
            let size_str = if human_readable {
                Self::format_size(entry.size)
            } else {
                entry.size.to_string()
            };
            let type_char = if entry.is_dir { "d" } else { "-" };
            if !entry.is_dir {
                files += 1;
                total_size += entry.size;
            }

            let _ = self
                .term
                .write_line(&format!("{type_char} {size_str:>10}  {}", entry.name));
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} files, {}",
            Self::format_number(files),
            Self::format_size(total_size)
        ));

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Shown even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}
