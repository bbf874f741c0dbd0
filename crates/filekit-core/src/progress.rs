//! Progress reporting for directory packaging.

use std::path::Path;

/// Callback trait for progress reporting while an archive is written.
///
/// # Examples
///
/// ```
/// use filekit_core::ProgressCallback;
/// use std::path::Path;
///
/// struct EntryCounter {
///     started: usize,
///     bytes: u64,
/// }
///
/// impl ProgressCallback for EntryCounter {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("[{current}/{total}] {}", path.display());
///         self.started += 1;
///     }
///
///     fn on_bytes_written(&mut self, bytes: u64) {
///         self.bytes += bytes;
///     }
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before an entry is written.
    ///
    /// `current` is 1-indexed; `total` is the number of entries planned.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called after each chunk of file bytes has been written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been completely written.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once when the archive is finished.
    fn on_complete(&mut self);
}

/// `ProgressCallback` that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}

/// Wraps a callback and numbers entries as they start.
pub(crate) struct ProgressTracker<'a> {
    progress: &'a mut dyn ProgressCallback,
    current_entry: usize,
    total_entries: usize,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(progress: &'a mut dyn ProgressCallback, total_entries: usize) -> Self {
        Self {
            progress,
            current_entry: 0,
            total_entries,
        }
    }

    pub(crate) fn on_entry_start(&mut self, path: &Path) {
        self.current_entry += 1;
        self.progress
            .on_entry_start(path, self.total_entries, self.current_entry);
    }

    pub(crate) fn on_bytes_written(&mut self, bytes: u64) {
        self.progress.on_bytes_written(bytes);
    }

    pub(crate) fn on_entry_complete(&mut self, path: &Path) {
        self.progress.on_entry_complete(path);
    }

    pub(crate) fn on_complete(&mut self) {
        self.progress.on_complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Recorder {
        starts: Vec<(PathBuf, usize, usize)>,
        bytes: u64,
        completed: Vec<PathBuf>,
        finished: usize,
    }

    impl ProgressCallback for Recorder {
        fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
            self.starts.push((path.to_path_buf(), total, current));
        }

        fn on_bytes_written(&mut self, bytes: u64) {
            self.bytes += bytes;
        }

        fn on_entry_complete(&mut self, path: &Path) {
            self.completed.push(path.to_path_buf());
        }

        fn on_complete(&mut self) {
            self.finished += 1;
        }
    }

    #[test]
    fn test_tracker_numbers_entries() {
        let mut recorder = Recorder::default();
        {
            let mut tracker = ProgressTracker::new(&mut recorder, 2);
            tracker.on_entry_start(Path::new("a.txt"));
            tracker.on_bytes_written(3);
            tracker.on_entry_complete(Path::new("a.txt"));
            tracker.on_entry_start(Path::new("b.txt"));
            tracker.on_bytes_written(4);
            tracker.on_entry_complete(Path::new("b.txt"));
            tracker.on_complete();
        }

        assert_eq!(
            recorder.starts,
            [
                (PathBuf::from("a.txt"), 2, 1),
                (PathBuf::from("b.txt"), 2, 2)
            ]
        );
        assert_eq!(recorder.bytes, 7);
        assert_eq!(recorder.completed.len(), 2);
        assert_eq!(recorder.finished, 1);
    }

    #[test]
    fn test_noop_progress() {
        let mut noop = NoopProgress;
        noop.on_entry_start(Path::new("x"), 1, 1);
        noop.on_bytes_written(10);
        noop.on_entry_complete(Path::new("x"));
        noop.on_complete();
    }
}
