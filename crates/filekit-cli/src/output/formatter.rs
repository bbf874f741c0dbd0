//! Output formatter trait for CLI results.

use anyhow::Result;
use filekit_core::FileInfo;
use filekit_core::PackReport;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of packing a directory
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()>;

    /// Format whole-file text content
    fn format_text(&self, operation: &str, path: &Path, content: &str) -> Result<()>;

    /// Format a list of lines
    fn format_lines(&self, operation: &str, path: &Path, lines: &[String]) -> Result<()>;

    /// Format a list of file names
    fn format_names(&self, operation: &str, path: &Path, names: &[PathBuf]) -> Result<()>;

    /// Format a yes/no answer
    fn format_answer(&self, operation: &str, path: &Path, answer: bool) -> Result<()>;

    /// Format file metadata
    fn format_file_info(&self, info: &FileInfo) -> Result<()>;

    /// Format completion of an operation without a payload
    fn format_done(&self, operation: &str, path: &Path, message: &str) -> Result<()>;

    /// Format error message
    fn format_error(&self, operation: &str, error: &anyhow::Error);
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
