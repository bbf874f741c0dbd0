//! Lexical path helpers.
//!
//! Paths are normalized purely by their components, so symlinks are not
//! resolved. Only [`absolute`] consults the process, for its working directory.

use crate::Result;
use crate::error::IoResultExt;
use std::ffi::OsStr;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Makes `path` absolute against the working directory, then normalizes it.
///
/// # Errors
///
/// Fails if the working directory cannot be determined or `path` is empty.
pub fn absolute(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    Ok(normalize(std::path::absolute(path).at_path(path)?))
}

/// Normalizes a path by resolving `.` and `..` components lexically.
///
/// - `.` components are dropped.
/// - `name/..` pairs cancel out.
/// - Leading `..` components of a relative path are kept.
/// - `..` directly under the root of an absolute path is dropped.
/// - A path that normalizes to nothing becomes `.`.
///
/// # Examples
///
/// ```
/// use filekit_core::path::normalize;
/// use std::path::Path;
///
/// assert_eq!(normalize("foo/./bar/../baz.txt"), Path::new("foo/baz.txt"));
/// assert_eq!(normalize("../shared/data"), Path::new("../shared/data"));
/// assert_eq!(normalize("/../etc"), Path::new("/etc"));
/// assert_eq!(normalize("a/.."), Path::new("."));
/// ```
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut normalized = PathBuf::new();
    // Normal components currently on top of `normalized` that a `..` may pop.
    let mut depth = 0usize;
    let mut rooted = false;

    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) => normalized.push(component),
            Component::RootDir => {
                rooted = true;
                normalized.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !rooted {
                    normalized.push(component);
                }
            }
            Component::Normal(_) => {
                normalized.push(component);
                depth += 1;
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Returns the final component of a path, if it has one.
///
/// # Examples
///
/// ```
/// use filekit_core::path::base_name;
/// use std::ffi::OsStr;
///
/// assert_eq!(base_name("src/sub/b.txt"), Some(OsStr::new("b.txt")));
/// assert_eq!(base_name("/"), None);
/// ```
pub fn base_name<P: AsRef<Path> + ?Sized>(path: &P) -> Option<&OsStr> {
    path.as_ref().file_name()
}
