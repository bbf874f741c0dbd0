//! Directory packaging reporting.

use std::time::Duration;

/// Report of a packaging operation.
///
/// # Examples
///
/// ```
/// use filekit_core::packaging::PackReport;
///
/// let mut report = PackReport::default();
/// report.files_added = 10;
/// report.bytes_written = 1024;
/// report.bytes_compressed = 512;
///
/// assert_eq!(report.compression_ratio(), 2.0);
/// assert_eq!(report.compression_percentage(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Number of entries written to the archive.
    pub files_added: usize,

    /// Number of directories walked, the source root included.
    pub directories_visited: usize,

    /// Total file bytes written into entries (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive on disk.
    pub bytes_compressed: u64,

    /// Files dropped because a later file had the same base name.
    pub name_collisions: usize,

    /// Nodes skipped (symlinks when not following, special files).
    pub files_skipped: usize,

    /// Duration of the operation.
    pub duration: Duration,

    /// Warnings generated while walking or writing.
    pub warnings: Vec<String>,
}

impl PackReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the compression ratio (uncompressed / compressed).
    ///
    /// Returns 0.0 if either side is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }

    /// Returns the space saved as a percentage of the uncompressed size.
    ///
    /// Returns 0.0 if nothing was written. Archive overhead can make this
    /// negative for tiny inputs.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        let saved = self.bytes_written as f64 - self.bytes_compressed as f64;
        saved / self.bytes_written as f64 * 100.0
    }
}
