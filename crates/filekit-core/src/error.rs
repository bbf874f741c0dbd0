//! Error types for file, directory and packaging operations.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `FileKitError`.
pub type Result<T> = std::result::Result<T, FileKitError>;

/// Errors that can occur during filekit operations.
#[derive(Error, Debug)]
pub enum FileKitError {
    /// The path does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The path exists but access to it was refused.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The inaccessible path.
        path: PathBuf,
    },

    /// A directory was required but the path is something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Compression level outside the accepted range.
    #[error("invalid compression level {level} (expected 0-9)")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// I/O operation failed on a specific path.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being accessed when the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The zip writer rejected an operation.
    #[error("archive error: {0}")]
    Archive(String),
}

impl FileKitError {
    /// Classifies an I/O error raised while accessing `path`.
    ///
    /// `NotFound` and `PermissionDenied` map onto their dedicated variants,
    /// everything else is kept as [`FileKitError::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use filekit_core::FileKitError;
    /// use std::io;
    ///
    /// let err = io::Error::new(io::ErrorKind::NotFound, "gone");
    /// let err = FileKitError::from_io(err, "data/input.txt");
    /// assert!(err.is_not_found());
    /// ```
    pub fn from_io(err: io::Error, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Returns `true` if the error reports a missing path.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Returns `true` if the error reports refused access.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Returns the path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathNotFound { path }
            | Self::PermissionDenied { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => Some(path),
            Self::InvalidCompressionLevel { .. } | Self::Archive(_) => None,
        }
    }
}

impl From<zip::result::ZipError> for FileKitError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

/// Extension for attaching a path to raw `io::Result`s.
pub(crate) trait IoResultExt<T> {
    /// Converts the error with [`FileKitError::from_io`].
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| FileKitError::from_io(e, path))
    }
}
