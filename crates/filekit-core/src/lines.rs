//! Line-list file operations.
//!
//! Files are read as UTF-8 and split on `\n`, `\r\n` or a lone `\r`. Line
//! terminators are never part of a line, and a trailing terminator does not
//! produce an empty last line. Writes terminate every line with `\n`.

use crate::Result;
use crate::text::read_string;
use crate::text::write_string;
use std::path::Path;

/// Reads the file as a list of lines.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::lines;
///
/// lines::write_lines("hosts.txt", &["alpha", "beta"])?;
/// let hosts = lines::add_line("hosts.txt", "gamma")?;
/// assert_eq!(hosts, ["alpha", "beta", "gamma"]);
/// # Ok::<(), filekit_core::FileKitError>(())
/// ```
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(split_lines(&read_string(path)?))
}

/// Replaces the file content with `lines`, one per line.
pub fn write_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    write_string(path, &join_lines(lines))
}

/// Appends one line and returns the resulting lines.
pub fn add_line(path: impl AsRef<Path>, line: &str) -> Result<Vec<String>> {
    add_lines(path, &[line])
}

/// Appends several lines and returns the resulting lines.
pub fn add_lines<S: AsRef<str>>(path: impl AsRef<Path>, extra: &[S]) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut lines = read_lines(path)?;
    lines.extend(extra.iter().map(|l| l.as_ref().to_owned()));
    write_lines(path, &lines)?;
    Ok(lines)
}

/// Removes the first line equal to `line` and returns the resulting lines.
pub fn remove_line(path: impl AsRef<Path>, line: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut lines = read_lines(path)?;
    if let Some(idx) = lines.iter().position(|l| l == line) {
        lines.remove(idx);
    }
    write_lines(path, &lines)?;
    Ok(lines)
}

/// Removes every line equal to any of `remove` and returns the rest.
pub fn remove_lines<S: AsRef<str>>(path: impl AsRef<Path>, remove: &[S]) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut lines = read_lines(path)?;
    lines.retain(|l| !remove.iter().any(|r| r.as_ref() == l));
    write_lines(path, &lines)?;
    Ok(lines)
}

/// Returns `true` if some line equals `line`.
pub fn contains_line(path: impl AsRef<Path>, line: &str) -> Result<bool> {
    Ok(read_lines(path)?.iter().any(|l| l == line))
}

/// Returns `true` if every entry of `wanted` is present as a line.
pub fn contains_lines<S: AsRef<str>>(path: impl AsRef<Path>, wanted: &[S]) -> Result<bool> {
    let lines = read_lines(path)?;
    Ok(wanted
        .iter()
        .all(|w| lines.iter().any(|l| l == w.as_ref())))
}

fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        if let Some(idx) = rest.find(['\n', '\r']) {
            lines.push(rest[..idx].to_owned());
            let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[idx + terminator..];
        } else {
            lines.push(rest.to_owned());
            break;
        }
    }

    lines
}

fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}
