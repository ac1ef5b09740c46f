//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use treezip_core::EntryInfo;
use treezip_core::ExtractionReport;
use treezip_core::PackReport;

pub struct JsonFormatter;

#[derive(Serialize)]
struct PackOutput {
    archive: String,
    entries: Vec<String>,
    files_added: usize,
    directories_added: usize,
    directories_skipped: usize,
    items_filtered: usize,
    bytes_written: u64,
    duration_ms: u128,
}

impl PackOutput {
    fn new(archive: &Path, report: &PackReport) -> Self {
        Self {
            archive: archive.display().to_string(),
            entries: report.entries.clone(),
            files_added: report.files_added,
            directories_added: report.directories_added,
            directories_skipped: report.directories_skipped,
            items_filtered: report.items_filtered,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        }
    }
}

#[derive(Serialize)]
struct ExtractionOutput {
    paths: Vec<String>,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    duration_ms: u128,
}

#[derive(Serialize)]
struct EntryOutput<'a> {
    name: &'a str,
    is_dir: bool,
    size: u64,
    compressed_size: u64,
}

impl<'a> From<&'a EntryInfo> for EntryOutput<'a> {
    fn from(info: &'a EntryInfo) -> Self {
        Self {
            name: &info.name,
            is_dir: info.is_dir,
            size: info.size,
            compressed_size: info.compressed_size,
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, archive: &Path, report: &PackReport) -> Result<()> {
        let output = JsonOutput::success("pack", PackOutput::new(archive, report));
        Self::output(&output)
    }

    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        let data = ExtractionOutput {
            paths: report
                .paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        };

        let output = JsonOutput::success("extract", data);
        Self::output(&output)
    }

    fn format_entries_short(&self, entries: &[EntryInfo]) -> Result<()> {
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        Self::output(&JsonOutput::success("list", names))
    }

    fn format_entries_long(&self, entries: &[EntryInfo], _human_readable: bool) -> Result<()> {
        let data: Vec<EntryOutput<'_>> = entries.iter().map(EntryOutput::from).collect();
        Self::output(&JsonOutput::success("list", data))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("unknown", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
