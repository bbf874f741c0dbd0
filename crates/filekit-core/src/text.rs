//! Whole-file UTF-8 string operations.
//!
//! Every function touches its target first, so a missing file is created
//! empty and reads back as `""`.

use crate::Result;
use crate::error::IoResultExt;
use crate::files::touch;
use std::fs;
use std::path::Path;

/// Reads the whole file as UTF-8.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::text;
///
/// text::write_string("notes.txt", "hello")?;
/// assert_eq!(text::read_string("notes.txt")?, "hello");
/// # Ok::<(), filekit_core::FileKitError>(())
/// ```
pub fn read_string(path: impl AsRef<Path>) -> Result<String> {
    let path = touch(path)?;
    fs::read_to_string(&path).at_path(&path)
}

/// Replaces the file content with `text`.
pub fn write_string(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = touch(path)?;
    fs::write(&path, text).at_path(&path)
}

/// Appends `text` to the file and returns the new content.
pub fn add_string(path: impl AsRef<Path>, text: &str) -> Result<String> {
    let path = path.as_ref();
    let mut content = read_string(path)?;
    content.push_str(text);
    write_string(path, &content)?;
    Ok(content)
}

/// Removes every occurrence of `needle` and returns the new content.
pub fn remove_string(path: impl AsRef<Path>, needle: &str) -> Result<String> {
    let path = path.as_ref();
    let content = read_string(path)?.replace(needle, "");
    write_string(path, &content)?;
    Ok(content)
}

/// Returns `true` if the file contains `needle`.
pub fn contains_string(path: impl AsRef<Path>, needle: &str) -> Result<bool> {
    Ok(read_string(path)?.contains(needle))
}
