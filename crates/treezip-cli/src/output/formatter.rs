//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use treezip_core::EntryInfo;
use treezip_core::ExtractionReport;
use treezip_core::PackReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of packing a directory or a file list
    fn format_pack_result(&self, archive: &Path, report: &PackReport) -> Result<()>;

    /// Format extraction result
    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()>;

    /// Format entry names, one per line
    fn format_entries_short(&self, entries: &[EntryInfo]) -> Result<()>;

    /// Format entries with kind and sizes
    fn format_entries_long(&self, entries: &[EntryInfo], human_readable: bool) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
