//! Error conversion utilities for CLI.
//!
//! Converts filekit-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use filekit_core::FileKitError;

/// Converts `FileKitError` to a user-friendly anyhow error with a hint.
pub fn convert_error(err: FileKitError) -> anyhow::Error {
    match err {
        FileKitError::PathNotFound { path } => {
            anyhow!(
                "Path not found: '{}'\n\
                 HINT: Check the spelling; relative paths are resolved from the current directory.",
                path.display()
            )
        }
        FileKitError::PermissionDenied { path } => {
            anyhow!(
                "Permission denied: '{}'\n\
                 HINT: Check the file permissions or run as a user that can access it.",
                path.display()
            )
        }
        FileKitError::NotADirectory { path } => {
            anyhow!(
                "Not a directory: '{}'\n\
                 HINT: This command expects a directory path.",
                path.display()
            )
        }
        FileKitError::InvalidCompressionLevel { level } => {
            anyhow!(
                "Invalid compression level {level}\n\
                 HINT: Use 0 to store entries uncompressed or 1-9 for deflate."
            )
        }
        FileKitError::Archive(reason) => {
            anyhow!(
                "Failed to write archive: {reason}\n\
                 HINT: Check free disk space and that the output location is writable."
            )
        }
        err @ FileKitError::Io { .. } => anyhow::Error::from(err),
    }
}

/// Converts a core result, attaching hints to its error.
pub fn add_context<T>(result: filekit_core::Result<T>) -> anyhow::Result<T> {
    result.map_err(convert_error)
}
