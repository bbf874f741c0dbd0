//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use filekit_core::FileInfo;
use filekit_core::PackReport;
use serde::Serialize;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct PackOutput {
    output_path: String,
    files_added: usize,
    directories_visited: usize,
    bytes_written: u64,
    bytes_compressed: u64,
    compression_ratio: f64,
    compression_percentage: f64,
    name_collisions: usize,
    files_skipped: usize,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl PackOutput {
    fn new(output_path: &Path, report: &PackReport) -> Self {
        Self {
            output_path: output_path.display().to_string(),
            files_added: report.files_added,
            directories_visited: report.directories_visited,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            compression_percentage: report.compression_percentage(),
            name_collisions: report.name_collisions,
            files_skipped: report.files_skipped,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

#[derive(Serialize)]
struct InfoOutput {
    path: String,
    size: u64,
    is_dir: bool,
    modified_unix: u64,
}

impl From<&FileInfo> for InfoOutput {
    fn from(info: &FileInfo) -> Self {
        Self {
            path: info.path.display().to_string(),
            size: info.size,
            is_dir: info.is_dir,
            modified_unix: info
                .modified
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        Self::output(&JsonOutput::success(
            "zip",
            PackOutput::new(output_path, report),
        ))
    }

    fn format_text(&self, operation: &str, path: &Path, content: &str) -> Result<()> {
        #[derive(Serialize)]
        struct TextOutput<'a> {
            path: String,
            content: &'a str,
        }

        Self::output(&JsonOutput::success(
            operation,
            TextOutput {
                path: path.display().to_string(),
                content,
            },
        ))
    }

    fn format_lines(&self, operation: &str, path: &Path, lines: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct LinesOutput<'a> {
            path: String,
            lines: &'a [String],
        }

        Self::output(&JsonOutput::success(
            operation,
            LinesOutput {
                path: path.display().to_string(),
                lines,
            },
        ))
    }

    fn format_names(&self, operation: &str, path: &Path, names: &[PathBuf]) -> Result<()> {
        #[derive(Serialize)]
        struct NamesOutput {
            path: String,
            names: Vec<String>,
        }

        Self::output(&JsonOutput::success(
            operation,
            NamesOutput {
                path: path.display().to_string(),
                names: names.iter().map(|n| n.display().to_string()).collect(),
            },
        ))
    }

    fn format_answer(&self, operation: &str, path: &Path, answer: bool) -> Result<()> {
        #[derive(Serialize)]
        struct AnswerOutput {
            path: String,
            result: bool,
        }

        Self::output(&JsonOutput::success(
            operation,
            AnswerOutput {
                path: path.display().to_string(),
                result: answer,
            },
        ))
    }

    fn format_file_info(&self, info: &FileInfo) -> Result<()> {
        Self::output(&JsonOutput::success("file.info", InfoOutput::from(info)))
    }

    fn format_done(&self, operation: &str, path: &Path, message: &str) -> Result<()> {
        #[derive(Serialize)]
        struct DoneOutput<'a> {
            path: String,
            message: &'a str,
        }

        Self::output(&JsonOutput::success(
            operation,
            DoneOutput {
                path: path.display().to_string(),
                message,
            },
        ))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let _ = Self::output(&JsonOutput::error(operation, format!("{error:#}")));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pack_output_fields() {
        let report = PackReport {
            files_added: 2,
            bytes_written: 100,
            bytes_compressed: 50,
            name_collisions: 1,
            duration: Duration::from_millis(7),
            warnings: vec!["duplicate name a.txt".to_string()],
            ..PackReport::default()
        };

        let json = serde_json::to_value(JsonOutput::success(
            "zip",
            PackOutput::new(Path::new("out.zip"), &report),
        ))
        .unwrap();

        assert_eq!(json["operation"], "zip");
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["files_added"], 2);
        assert_eq!(json["data"]["name_collisions"], 1);
        assert_eq!(json["data"]["duration_ms"], 7);
        assert_eq!(json["data"]["compression_ratio"], 2.0);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_value(JsonOutput::error("dir", "boom")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }
}
