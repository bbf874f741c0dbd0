//! File, line and directory helpers with flat ZIP packaging.
//!
//! `filekit-core` bundles small filesystem conveniences (whole-file text,
//! line lists, directory management, file metadata, lexical path cleanup)
//! with [`pack_directory`], which stores every file of a directory tree in a
//! single-level ZIP archive.
//!
//! # Examples
//!
//! ```no_run
//! use filekit_core::lines;
//! use filekit_core::pack_directory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! lines::add_line("export/manifest.txt", "build 42")?;
//! let report = pack_directory("export", "export.zip")?;
//! println!("Packed {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod copy;
pub mod dirs;
pub mod error;
pub mod files;
pub mod lines;
pub mod packaging;
pub mod path;
pub mod progress;
pub mod text;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::FileKitError;
pub use error::Result;
pub use files::FileInfo;
pub use packaging::PackConfig;
pub use packaging::PackReport;
pub use packaging::pack_directory;
pub use packaging::pack_directory_with;
pub use progress::NoopProgress;
pub use progress::ProgressCallback;
