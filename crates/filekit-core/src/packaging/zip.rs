//! Flat ZIP packaging of a directory tree.

use crate::FileKitError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_buffer;
use crate::error::IoResultExt;
use crate::packaging::PackConfig;
use crate::packaging::PackReport;
use crate::packaging::walker::PackPlan;
use crate::packaging::walker::plan_directory;
use crate::path::absolute;
use crate::progress::ProgressTracker;
use std::fs;
use std::fs::File;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Packs every regular file below `source` into a flat ZIP at `destination`.
///
/// Uses [`PackConfig::default`] and no progress reporting. See
/// [`pack_directory_with`] for the full behavior.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::pack_directory;
///
/// let report = pack_directory("build/assets", "dist/assets.zip")?;
/// println!("packed {} files", report.files_added);
/// # Ok::<(), filekit_core::FileKitError>(())
/// ```
///
/// # Errors
///
/// See [`pack_directory_with`].
pub fn pack_directory(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<PackReport> {
    pack_directory_with(source, destination, &PackConfig::default(), &mut NoopProgress)
}

/// Packs every regular file below `source` into a flat ZIP at `destination`.
///
/// Each file becomes one entry named by its base name alone; directory
/// structure is discarded and no directory entries are written. When several
/// files share a base name, the one visited last wins and the others are
/// counted in [`PackReport::name_collisions`]. Traversal is depth-first with
/// children in file-name order.
///
/// The source is validated before the destination is touched, so a missing
/// source never leaves an empty archive behind. Parent directories of
/// `destination` are created, an existing file is overwritten, and the
/// archive is never included in itself when it lies inside `source`.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::NoopProgress;
/// use filekit_core::packaging::PackConfig;
/// use filekit_core::packaging::pack_directory_with;
///
/// let config = PackConfig::default().with_compression_level(9);
/// let report = pack_directory_with("logs", "logs.zip", &config, &mut NoopProgress)?;
/// println!("{:.1}% saved", report.compression_percentage());
/// # Ok::<(), filekit_core::FileKitError>(())
/// ```
///
/// # Errors
///
/// - [`FileKitError::InvalidCompressionLevel`] if the config is invalid
/// - [`FileKitError::PathNotFound`] if `source` does not exist
/// - [`FileKitError::NotADirectory`] if `source` is not a directory
/// - [`FileKitError::Io`] or [`FileKitError::Archive`] if reading a file or
///   writing the archive fails; a partially written archive is left in place
pub fn pack_directory_with(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<PackReport> {
    config.validate()?;
    let start = Instant::now();

    let source = absolute(source.as_ref())?;
    let destination = absolute(destination.as_ref())?;

    let source_meta = fs::metadata(&source).at_path(&source)?;
    if !source_meta.is_dir() {
        return Err(FileKitError::NotADirectory { path: source });
    }

    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        level = config.effective_level(),
        "packing directory"
    );

    let plan = plan_directory(&source, Some(&destination), config)?;
    tracing::debug!(
        files = plan.files.len(),
        bytes = plan.total_bytes(),
        collisions = plan.name_collisions,
        "planned archive entries"
    );

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).at_path(parent)?;
    }
    let file = File::create(&destination).at_path(&destination)?;

    let (file, mut report) = write_plan(file, &plan, config, progress, &destination)?;

    report.directories_visited = plan.directories_visited;
    report.name_collisions = plan.name_collisions;
    report.files_skipped = plan.files_skipped;
    for warning in plan.warnings {
        report.add_warning(warning);
    }
    report.bytes_compressed = file.metadata().at_path(&destination)?.len();
    report.duration = start.elapsed();

    tracing::info!(
        files = report.files_added,
        bytes_written = report.bytes_written,
        bytes_compressed = report.bytes_compressed,
        warnings = report.warnings.len(),
        "archive complete"
    );

    Ok(report)
}

fn entry_options(config: &PackConfig) -> SimpleFileOptions {
    if config.effective_level() == 0 {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(config.effective_level())))
    }
}

/// Writes the planned files into a ZIP over any seekable writer.
///
/// Returns the finished writer with the counters the write itself produces.
fn write_plan<W: Write + Seek>(
    writer: W,
    plan: &PackPlan,
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
    archive: &Path,
) -> Result<(W, PackReport)> {
    let mut zip = ZipWriter::new(writer);
    let mut report = PackReport::new();
    let mut tracker = ProgressTracker::new(progress, plan.files.len());
    let mut buffer = CopyBuffer::new();
    let options = entry_options(config);

    for planned in &plan.files {
        let entry_path = Path::new(&planned.name);
        tracker.on_entry_start(entry_path);

        let mut file = File::open(&planned.path).at_path(&planned.path)?;
        let metadata = file.metadata().at_path(&planned.path)?;

        let file_options = options.large_file(metadata.len() >= u64::from(u32::MAX));
        #[cfg(unix)]
        let file_options = if config.preserve_permissions {
            use std::os::unix::fs::PermissionsExt;
            file_options.unix_permissions(metadata.permissions().mode())
        } else {
            file_options
        };

        zip.start_file(planned.name.as_str(), file_options)?;

        let copied = copy_with_buffer(&mut file, &mut zip, &mut buffer, |n| {
            tracker.on_bytes_written(n);
        })
        .map_err(|e| match e {
            CopyError::Read(source) => FileKitError::from_io(source, &planned.path),
            CopyError::Write(source) => FileKitError::Io {
                path: archive.to_path_buf(),
                source,
            },
        })?;

        report.files_added += 1;
        report.bytes_written += copied;
        tracker.on_entry_complete(entry_path);
        tracing::debug!(entry = %planned.name, bytes = copied, "added entry");
    }

    let writer = zip.finish()?;
    tracker.on_complete();

    Ok((writer, report))
}
