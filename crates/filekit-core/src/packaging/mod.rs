//! Flat ZIP packaging of directory trees.
//!
//! Every regular file below the source directory becomes one archive entry
//! named by its base name. Directory structure is not recorded.
//!
//! # Examples
//!
//! ```no_run
//! use filekit_core::NoopProgress;
//! use filekit_core::packaging::PackConfig;
//! use filekit_core::packaging::pack_directory_with;
//!
//! let config = PackConfig::default()
//!     .with_compression_level(0)
//!     .with_follow_symlinks(true);
//! let report = pack_directory_with("reports", "reports.zip", &config, &mut NoopProgress)?;
//! for warning in &report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok::<(), filekit_core::FileKitError>(())
//! ```

pub mod config;
pub mod report;
mod walker;
mod zip;

pub use config::DEFAULT_COMPRESSION_LEVEL;
pub use config::MAX_COMPRESSION_LEVEL;
pub use config::PackConfig;
pub use report::PackReport;
pub use self::zip::pack_directory;
pub use self::zip::pack_directory_with;
