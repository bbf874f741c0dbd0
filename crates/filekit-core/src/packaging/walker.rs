//! Source tree traversal for flat packaging.
//!
//! The walk produces a [`PackPlan`]: the files that end up in the archive,
//! keyed by base name. `walkdir` keeps the pending directories on its own
//! stack, so tree depth never grows the call stack. Traversal is depth-first
//! pre-order with children visited in file-name order, which makes the plan
//! deterministic for a given tree.

use crate::FileKitError;
use crate::Result;
use crate::dirs::walk_error;
use crate::packaging::PackConfig;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use walkdir::DirEntry;
use walkdir::WalkDir;

/// A file selected for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlannedFile {
    /// Filesystem path of the file.
    pub path: PathBuf,
    /// Entry name in the archive (the file's base name).
    pub name: String,
    /// Size reported by the filesystem during the walk.
    pub size: u64,
}

/// Result of walking a source tree.
#[derive(Debug, Default)]
pub(crate) struct PackPlan {
    /// Files in the order their final occurrence was visited.
    pub files: Vec<PlannedFile>,
    pub directories_visited: usize,
    pub name_collisions: usize,
    pub files_skipped: usize,
    pub warnings: Vec<String>,
}

impl PackPlan {
    pub(crate) fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    fn warn(&mut self, msg: String) {
        tracing::warn!("{msg}");
        self.warnings.push(msg);
    }

    fn skip(&mut self, msg: String) {
        self.files_skipped += 1;
        self.warn(msg);
    }

    /// Records a walk failure below the root.
    fn skip_unwalkable(&mut self, err: walkdir::Error, root: &Path) {
        if err.loop_ancestor().is_some() {
            let path = err.path().unwrap_or(root).display().to_string();
            self.skip(format!("skipped symlink loop: {path}"));
            return;
        }
        let broken_link = err
            .path()
            .is_some_and(|p| p.is_symlink() && std::fs::metadata(p).is_err());
        let err = walk_error(err, root);
        if broken_link {
            self.skip(format!("skipped broken symlink: {err}"));
        } else {
            self.warn(format!("skipped unreadable directory: {err}"));
        }
    }
}

/// Accumulates planned files, replacing earlier files with the same name.
#[derive(Default)]
struct NameTable {
    slots: Vec<Option<PlannedFile>>,
    by_name: HashMap<String, usize>,
}

impl NameTable {
    /// Inserts `file`, returning the entry it displaced, if any.
    fn insert(&mut self, file: PlannedFile) -> Option<PlannedFile> {
        let replaced = self
            .by_name
            .insert(file.name.clone(), self.slots.len())
            .and_then(|idx| self.slots[idx].take());
        self.slots.push(Some(file));
        replaced
    }

    fn into_files(self) -> Vec<PlannedFile> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Walks `root` and flattens every regular file below it onto its base name.
///
/// When two files share a base name the one visited later replaces the
/// earlier one. `exclude` names a path that must never be planned, normally
/// the archive being written.
///
/// # Errors
///
/// Fails if the root itself cannot be listed, if a file's metadata cannot be
/// read, or if a file name is not valid UTF-8. Unreadable nested directories
/// only produce warnings.
pub(crate) fn plan_directory(
    root: &Path,
    exclude: Option<&Path>,
    config: &PackConfig,
) -> Result<PackPlan> {
    let mut plan = PackPlan::default();
    let mut table = NameTable::default();
    let follow = config.follow_symlinks;
    let mut visited_dirs: HashSet<PathBuf> = HashSet::new();
    let mut relinked: Vec<PathBuf> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(follow)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // Only followed links can reach one physical directory twice.
            if !follow || !entry.file_type().is_dir() {
                return true;
            }
            let Ok(canonical) = entry.path().canonicalize() else {
                return true;
            };
            let first_visit = visited_dirs.insert(canonical);
            if !first_visit {
                relinked.push(entry.path().to_path_buf());
            }
            first_visit
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(walk_error(err, root)),
            Err(err) => {
                plan.skip_unwalkable(err, root);
                continue;
            }
        };

        let file_type = entry.file_type();
        if entry.depth() > 0 && entry.path_is_symlink() && !follow {
            plan.skip(format!("skipped symlink: {}", entry.path().display()));
        } else if entry.depth() == 0 || file_type.is_dir() {
            plan.directories_visited += 1;
            tracing::debug!(dir = %entry.path().display(), "walking directory");
        } else if !file_type.is_file() {
            plan.skip(format!("skipped special file: {}", entry.path().display()));
        } else if exclude.is_some_and(|excluded| excluded == entry.path()) {
            tracing::debug!(path = %entry.path().display(), "skipping archive being written");
        } else {
            let planned = plan_file(&entry)?;
            let name = planned.name.clone();
            let path = planned.path.clone();
            if let Some(replaced) = table.insert(planned) {
                plan.name_collisions += 1;
                plan.warn(format!(
                    "duplicate name {name}: {} replaced by {}",
                    replaced.path.display(),
                    path.display()
                ));
            }
        }
    }

    for path in relinked {
        plan.warn(format!(
            "directory already packed via another link: {}",
            path.display()
        ));
    }

    plan.files = table.into_files();
    Ok(plan)
}

fn plan_file(entry: &DirEntry) -> Result<PlannedFile> {
    let path = entry.path().to_path_buf();
    let name = entry
        .file_name()
        .to_str()
        .ok_or_else(|| FileKitError::Io {
            path: path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
        })?
        .to_owned();
    let size = entry.metadata().map_err(|e| walk_error(e, &path))?.len();

    Ok(PlannedFile { path, name, size })
}
