//! Directory management: create, clear, delete, list and copy.

use crate::FileKitError;
use crate::Result;
use crate::error::IoResultExt;
use crate::path::absolute;
use crate::path::normalize;
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Creates a directory and any missing parents.
///
/// Succeeds if the directory already exists. Returns the normalized path.
///
/// # Errors
///
/// Returns [`FileKitError::NotADirectory`] if a non-directory is in the way.
pub fn create_directory(path: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = normalize(path);
    if dir.exists() && !dir.is_dir() {
        return Err(FileKitError::NotADirectory { path: dir });
    }
    fs::create_dir_all(&dir).at_path(&dir)?;
    Ok(dir)
}

/// Empties a directory, creating it first if it does not exist.
///
/// The directory itself is kept.
pub fn clear_directory(path: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = create_directory(path)?;

    for entry in fs::read_dir(&dir).at_path(&dir)? {
        let entry = entry.at_path(&dir)?;
        let child = entry.path();
        let file_type = entry.file_type().at_path(&child)?;
        if file_type.is_dir() {
            fs::remove_dir_all(&child).at_path(&child)?;
        } else {
            fs::remove_file(&child).at_path(&child)?;
        }
    }

    tracing::debug!(dir = %dir.display(), "cleared directory");
    Ok(dir)
}

/// Deletes a directory and everything below it.
///
/// A missing directory is not an error. Returns the normalized path.
pub fn delete_directory(path: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = normalize(path);
    if !dir.exists() {
        return Ok(dir);
    }
    if !dir.is_dir() {
        return Err(FileKitError::NotADirectory { path: dir });
    }
    fs::remove_dir_all(&dir).at_path(&dir)?;
    tracing::debug!(dir = %dir.display(), "deleted directory");
    Ok(dir)
}

/// Lists the base names of every regular file below `path`.
///
/// The walk is recursive and ordered by file name; duplicate names from
/// different subdirectories are all kept.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::dirs::list_file_names;
///
/// for name in list_file_names("assets")? {
///     println!("{}", name.display());
/// }
/// # Ok::<(), filekit_core::FileKitError>(())
/// ```
pub fn list_file_names(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = normalize(path);
    if !root.exists() {
        return Err(FileKitError::PathNotFound { path: root });
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(e, &root))?;
        if entry.file_type().is_file() {
            names.push(PathBuf::from(entry.file_name()));
        }
    }
    Ok(names)
}

/// Copies the contents of `from` into `to`, recursively.
///
/// Both directories are created if absent. Existing files in `to` are
/// overwritten and copied files keep their source modification time.
/// Symlinks are followed. If `to` lies inside `from` it is not copied into
/// itself.
pub fn copy_directory(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    let from = absolute(create_directory(from)?)?;
    let to = absolute(create_directory(to)?)?;

    // Snapshot the tree before writing so new files under `to` are not revisited.
    let entries = WalkDir::new(&from)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.path() != to)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| walk_error(e, &from))?;

    let mut copied = 0usize;
    for entry in entries {
        let relative = entry
            .path()
            .strip_prefix(&from)
            .map_err(|e| FileKitError::Io {
                path: entry.path().to_path_buf(),
                source: io::Error::other(e),
            })?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).at_path(&target)?;
            continue;
        }

        fs::copy(entry.path(), &target).at_path(entry.path())?;
        let meta = entry.metadata().map_err(|e| walk_error(e, entry.path()))?;
        filetime::set_file_mtime(&target, FileTime::from_last_modification_time(&meta))
            .at_path(&target)?;
        copied += 1;
    }

    tracing::debug!(
        from = %from.display(),
        to = %to.display(),
        files = copied,
        "copied directory"
    );
    Ok(())
}

/// Converts a walkdir failure into a crate error, keeping the failing path.
pub(crate) fn walk_error(err: walkdir::Error, fallback: &Path) -> FileKitError {
    let path = err.path().unwrap_or(fallback).to_path_buf();
    match err.into_io_error() {
        Some(io_err) => FileKitError::from_io(io_err, path),
        // Only filesystem loops have no io error behind them.
        None => FileKitError::Io {
            path,
            source: io::Error::other("filesystem loop detected"),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;
    use std::time::SystemTime;
    use tempfile::TempDir;

    #[test]
    fn test_create_directory_nested_and_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c");

        assert_eq!(create_directory(&target).unwrap(), target);
        assert!(target.is_dir());
        assert!(create_directory(&target).is_ok());
    }

    #[test]
    fn test_create_directory_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("file.txt");
        fs::write(&target, "x").unwrap();

        let err = create_directory(&target).unwrap_err();
        assert!(matches!(err, FileKitError::NotADirectory { .. }));
    }

    #[test]
    fn test_clear_directory_keeps_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("cache");
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::write(root.join("top.txt"), "x").unwrap();
        fs::write(root.join("nested/deeper/low.txt"), "y").unwrap();

        clear_directory(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_directory_creates_missing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("fresh");

        clear_directory(&root).unwrap();

        assert!(root.is_dir());
    }

    #[test]
    fn test_delete_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("doomed");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("sub/file.txt"), "x").unwrap();

        delete_directory(&root).unwrap();
        assert!(!root.exists());

        // Second delete of a missing directory is fine.
        assert!(delete_directory(&root).is_ok());
    }

    #[test]
    fn test_delete_directory_on_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            delete_directory(&file).unwrap_err(),
            FileKitError::NotADirectory { .. }
        ));
        assert!(file.exists());
    }

    #[test]
    fn test_list_file_names_recursive_with_duplicates() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("sub/inner")).unwrap();
        fs::write(root.join("b.txt"), "1").unwrap();
        fs::write(root.join("sub/a.txt"), "2").unwrap();
        fs::write(root.join("sub/inner/b.txt"), "3").unwrap();

        let names = list_file_names(root).unwrap();

        assert_eq!(
            names,
            [
                PathBuf::from("b.txt"),
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt")
            ]
        );
    }

    #[test]
    fn test_list_file_names_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = list_file_names(temp.path().join("nope")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_copy_directory_overwrites_and_keeps_mtime() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from");
        let to = temp.path().join("to");
        fs::create_dir_all(from.join("sub")).unwrap();
        fs::create_dir_all(&to).unwrap();
        fs::write(from.join("a.txt"), "new").unwrap();
        fs::write(from.join("sub/b.txt"), "bee").unwrap();
        fs::write(to.join("a.txt"), "old content").unwrap();
        fs::write(to.join("extra.txt"), "stays").unwrap();

        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        filetime::set_file_mtime(from.join("a.txt"), FileTime::from_system_time(stamp)).unwrap();

        copy_directory(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(to.join("a.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(to.join("sub/b.txt")).unwrap(), "bee");
        assert_eq!(fs::read_to_string(to.join("extra.txt")).unwrap(), "stays");
        let copied = fs::metadata(to.join("a.txt")).unwrap().modified().unwrap();
        assert_eq!(copied, stamp);
    }

    #[test]
    fn test_copy_directory_creates_both_ends() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("src_missing");
        let to = temp.path().join("dst_missing");

        copy_directory(&from, &to).unwrap();

        assert!(from.is_dir());
        assert!(to.is_dir());
    }

    #[test]
    fn test_copy_directory_into_itself() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("tree");
        fs::create_dir_all(&from).unwrap();
        fs::write(from.join("leaf.txt"), "x").unwrap();

        copy_directory(&from, from.join("backup")).unwrap();

        assert!(from.join("backup/leaf.txt").is_file());
        assert!(!from.join("backup/backup").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_directory_relative_source_into_itself() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("tree");
        fs::create_dir_all(&from).unwrap();
        fs::write(from.join("leaf.txt"), "x").unwrap();

        // Same directory, spelled relative to the working directory.
        let cwd = std::env::current_dir().unwrap();
        let mut relative = PathBuf::new();
        for _ in 1..cwd.components().count() {
            relative.push("..");
        }
        relative.push(from.strip_prefix("/").unwrap());

        copy_directory(&relative, from.join("backup")).unwrap();

        assert!(from.join("backup/leaf.txt").is_file());
        assert!(!from.join("backup/backup").exists());
    }
}
