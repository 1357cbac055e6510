//! Deletion reporting and progress callbacks.

use std::time::Duration;

/// Outcome of a batch of archive deletions.
#[derive(Debug, Clone, Default)]
pub struct DeletionReport {
    /// Archive ids deleted, in the order they were attempted.
    pub deleted: Vec<String>,

    /// Archive ids the service refused, with the reason.
    pub failed: Vec<FailedDeletion>,

    /// Wall-clock duration of the batch.
    pub duration: Duration,
}

/// An archive that could not be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDeletion {
    /// Archive id.
    pub archive_id: String,
    /// Error reported by the service.
    pub reason: String,
}

impl DeletionReport {
    /// Creates a new empty deletion report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of archives attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    /// Returns whether any deletion failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Callback trait for progress reporting during batch deletion.
///
/// # Examples
///
/// ```
/// use coldvault_core::DeleteProgress;
///
/// struct Printer;
///
/// impl DeleteProgress for Printer {
///     fn on_archive_start(&mut self, archive_id: &str, total: usize, current: usize) {
///         println!("[{current}/{total}] {archive_id}");
///     }
///
///     fn on_archive_complete(&mut self, _archive_id: &str, deleted: bool) {
///         println!("deleted: {deleted}");
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait DeleteProgress {
    /// Called before an archive is deleted. `current` is 1-indexed.
    fn on_archive_start(&mut self, archive_id: &str, total: usize, current: usize);

    /// Called after the delete call returned.
    fn on_archive_complete(&mut self, archive_id: &str, deleted: bool);

    /// Called once after the last archive.
    fn on_complete(&mut self);
}

/// No-op implementation of `DeleteProgress`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl DeleteProgress for NoopProgress {
    fn on_archive_start(&mut self, _archive_id: &str, _total: usize, _current: usize) {}

    fn on_archive_complete(&mut self, _archive_id: &str, _deleted: bool) {}

    fn on_complete(&mut self) {}
}
