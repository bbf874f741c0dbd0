//! Configuration for directory packaging.

use crate::FileKitError;
use crate::Result;

/// Highest accepted compression level.
pub const MAX_COMPRESSION_LEVEL: u8 = 9;

/// Default deflate level.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Configuration for [`pack_directory_with`](crate::packaging::pack_directory_with).
///
/// # Examples
///
/// ```
/// use filekit_core::packaging::PackConfig;
///
/// let config = PackConfig::default()
///     .with_compression_level(9)
///     .with_follow_symlinks(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Compression level.
    ///
    /// `Some(0)` stores entries uncompressed, `Some(1..=9)` deflates at that
    /// level and `None` uses the default level (6).
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Copy unix permission bits of each file into its entry.
    ///
    /// Default: `true`.
    pub preserve_permissions: bool,

    /// Follow symlinks while walking the source tree.
    ///
    /// When `false`, symlinks are skipped and reported as warnings. When
    /// `true`, a symlink contributes whatever it points to, and a directory
    /// reachable through several links is walked only once.
    ///
    /// Default: `false`.
    pub follow_symlinks: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            compression_level: Some(DEFAULT_COMPRESSION_LEVEL),
            preserve_permissions: true,
            follow_symlinks: false,
        }
    }
}

impl PackConfig {
    /// Creates a new `PackConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is above 9. Use `validate()` on a config built by
    /// struct literal for non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!(
            level <= MAX_COMPRESSION_LEVEL,
            "compression level must be 0-9"
        );
        self.compression_level = Some(level);
        self
    }

    /// Sets whether to preserve permissions.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Returns the effective compression level.
    #[must_use]
    pub fn effective_level(&self) -> u8 {
        self.compression_level.unwrap_or(DEFAULT_COMPRESSION_LEVEL)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is above 9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > MAX_COMPRESSION_LEVEL
        {
            return Err(FileKitError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}
