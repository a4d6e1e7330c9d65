//! Extraction operation reporting.

use std::time::Duration;

/// Outcome of a single best-effort metadata restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The metadata was applied.
    Applied,
    /// The attempt failed; the error was discarded.
    Failed,
}

/// Counters for one kind of metadata restore (permissions or mtime).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataStats {
    /// Number of restore attempts.
    pub attempted: usize,
    /// Attempts that succeeded.
    pub applied: usize,
    /// Attempts that failed and were ignored.
    pub failed: usize,
}

impl MetadataStats {
    /// Records one restore attempt.
    pub fn record(&mut self, outcome: RestoreOutcome) {
        self.attempted += 1;
        match outcome {
            RestoreOutcome::Applied => self.applied += 1,
            RestoreOutcome::Failed => self.failed += 1,
        }
    }
}

/// Report of an archive extraction operation.
///
/// Contains statistics and metadata about the extraction process. Only
/// returned on success; a failed run reports nothing beyond its error.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Number of files successfully extracted.
    pub files_extracted: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Entries that resolve to the destination root itself and carry nothing
    /// to write.
    pub entries_skipped: usize,

    /// Number of file creations that needed the delayed retry.
    pub create_retries: usize,

    /// Permission restore attempts.
    pub permissions: MetadataStats,

    /// Modification time restore attempts.
    pub mtimes: MetadataStats,

    /// Duration of the extraction operation.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of filesystem objects materialized.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }

    /// Returns whether any best-effort metadata restore failed.
    #[must_use]
    pub const fn has_metadata_failures(&self) -> bool {
        self.permissions.failed > 0 || self.mtimes.failed > 0
    }
}
