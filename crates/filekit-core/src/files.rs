//! Single-file helpers: touch, delete and metadata queries.

use crate::FileKitError;
use crate::Result;
use crate::error::IoResultExt;
use crate::path::normalize;
use filetime::FileTime;
use std::fs;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;

/// Basic metadata about a filesystem node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Normalized path that was queried.
    pub path: PathBuf,
    /// Size in bytes (as reported by the filesystem for directories).
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
    /// Whether the node is a directory.
    pub is_dir: bool,
}

/// Makes sure a file exists, creating it (and missing parents) if absent.
///
/// An existing file keeps its content and gets its modification time set to
/// now. Returns the normalized path.
///
/// # Errors
///
/// Fails if the path names a directory or cannot be created.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::files::touch;
///
/// let path = touch("logs/./today/app.log")?;
/// assert!(path.ends_with("logs/today/app.log"));
/// # Ok::<(), filekit_core::FileKitError>(())
/// ```
pub fn touch(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = normalize(path);

    if path.is_dir() {
        return Err(FileKitError::Io {
            source: io::Error::new(io::ErrorKind::IsADirectory, "cannot touch a directory"),
            path,
        });
    }

    if path.exists() {
        filetime::set_file_mtime(&path, FileTime::now()).at_path(&path)?;
        return Ok(path);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).at_path(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .at_path(&path)?;
    tracing::debug!(path = %path.display(), "created empty file");

    Ok(path)
}

/// Deletes a file, returning whether something was removed.
///
/// Empty directories are removed too. Failures are reported as `false`.
pub fn delete_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let removed = if path.is_dir() {
        fs::remove_dir(path).is_ok()
    } else {
        fs::remove_file(path).is_ok()
    };
    if removed {
        tracing::debug!(path = %path.display(), "deleted");
    }
    removed
}

/// Returns the last modification time of a file or directory.
pub fn modified_time(path: impl AsRef<Path>) -> Result<SystemTime> {
    let path = path.as_ref();
    fs::metadata(path)
        .and_then(|m| m.modified())
        .at_path(path)
}

/// Returns the size of a file in bytes.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    Ok(fs::metadata(path).at_path(path)?.len())
}

/// Returns `true` if the file has no content or does not exist.
pub fn is_empty(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref()).map_or(true, |m| m.len() == 0)
}

/// Returns `true` if the normalized path exists.
pub fn exists(path: impl AsRef<Path>) -> bool {
    normalize(path).exists()
}

/// Collects size, modification time and kind for a path.
pub fn metadata(path: impl AsRef<Path>) -> Result<FileInfo> {
    let path = normalize(path);
    let meta = fs::metadata(&path).at_path(&path)?;
    let modified = meta.modified().at_path(&path)?;

    Ok(FileInfo {
        size: meta.len(),
        modified,
        is_dir: meta.is_dir(),
        path,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_touch_creates_file_and_parents() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c.txt");

        let created = touch(&target).unwrap();

        assert_eq!(created, target);
        assert!(target.is_file());
        assert_eq!(fs::metadata(&target).unwrap().len(), 0);
    }

    #[test]
    fn test_touch_keeps_content_and_bumps_mtime() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("keep.txt");
        fs::write(&target, "payload").unwrap();
        let old = FileTime::from_unix_time(1_000_000, 0);
        filetime::set_file_mtime(&target, old).unwrap();

        touch(&target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "payload");
        let mtime = FileTime::from_last_modification_time(&fs::metadata(&target).unwrap());
        assert!(mtime > old);
    }

    #[test]
    fn test_touch_normalizes_path() {
        let temp = TempDir::new().unwrap();
        let raw = temp.path().join("x/./y/../z.txt");

        let created = touch(&raw).unwrap();

        assert_eq!(created, temp.path().join("x/z.txt"));
        assert!(created.is_file());
    }

    #[test]
    fn test_touch_rejects_directory() {
        let temp = TempDir::new().unwrap();
        let err = touch(temp.path()).unwrap_err();
        assert!(matches!(err, FileKitError::Io { .. }));
    }

    #[test]
    fn test_delete_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("gone.txt");
        fs::write(&target, "x").unwrap();

        assert!(delete_file(&target));
        assert!(!target.exists());
        assert!(!delete_file(&target));
    }

    #[test]
    fn test_delete_file_non_empty_dir_is_false() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("inner.txt"), "x").unwrap();
        assert!(!delete_file(temp.path()));
    }

    #[test]
    fn test_modified_time() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("t.txt");
        fs::write(&target, "x").unwrap();
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        filetime::set_file_mtime(&target, FileTime::from_system_time(stamp)).unwrap();

        assert_eq!(modified_time(&target).unwrap(), stamp);
    }

    #[test]
    fn test_modified_time_missing() {
        let temp = TempDir::new().unwrap();
        let err = modified_time(temp.path().join("nope")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_size_and_is_empty() {
        let temp = TempDir::new().unwrap();
        let empty = temp.path().join("empty.txt");
        let full = temp.path().join("full.txt");
        fs::write(&empty, "").unwrap();
        fs::write(&full, "12345").unwrap();

        assert!(is_empty(&empty));
        assert!(!is_empty(&full));
        assert!(is_empty(temp.path().join("missing.txt")));
        assert_eq!(file_size(&full).unwrap(), 5);
        assert!(file_size(temp.path().join("missing.txt")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_exists_and_metadata() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("info.txt");
        fs::write(&target, "abc").unwrap();

        assert!(exists(temp.path().join("sub/../info.txt")));
        assert!(!exists(temp.path().join("other.txt")));

        let info = metadata(&target).unwrap();
        assert_eq!(info.size, 3);
        assert!(!info.is_dir);
        assert_eq!(info.path, target);

        assert!(metadata(temp.path()).unwrap().is_dir);
    }
}
