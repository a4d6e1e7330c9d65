//! Core extraction engine.

use std::io::Read;
use std::path::Path;
use std::time::Duration;
use std::time::Instant;

use tracing::debug;
use tracing::info;

use super::materialize::CREATE_RETRY_DELAY;
use super::materialize::create_directory;
use super::materialize::create_file;
use super::materialize::write_contents;
use super::metadata::restore_mtime;
use super::metadata::restore_permissions;
use crate::ExtractOptions;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::formats::source::ArchiveSource;
use crate::formats::tar::TarEntry;
use crate::formats::tar::TarReader;
use crate::types::EntryPath;

/// Streaming tar / tar.gz extractor.
///
/// Holds only options; every call to [`Extractor::extract`] is an independent
/// run. Entries are materialized in archive order, one output file open at a
/// time. The first fatal error stops the run and leaves whatever was already
/// written in place.
///
/// # Examples
///
/// ```
/// use tarsink_core::ExtractOptions;
/// use tarsink_core::Extractor;
/// use tarsink_core::test_utils::TarTestBuilder;
///
/// let archive = TarTestBuilder::new()
///     .add_directory("logs/")
///     .add_file("logs/app.log", b"hello")
///     .build_gz();
///
/// let dest = tempfile::tempdir()?;
/// let report = Extractor::new(ExtractOptions::default()).extract(archive.as_slice(), dest.path())?;
///
/// assert_eq!(report.files_extracted, 1);
/// assert_eq!(std::fs::read(dest.path().join("logs/app.log"))?, b"hello");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    options: ExtractOptions,
    retry_delay: Duration,
}

impl Extractor {
    /// Creates an extractor with the given options.
    #[must_use]
    pub const fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            retry_delay: CREATE_RETRY_DELAY,
        }
    }

    #[cfg(test)]
    const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Extracts a tar or tar.gz stream into `dest`.
    ///
    /// The format is detected from the first two bytes of `reader`. `dest`
    /// and any missing parents are created as entries need them.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error:
    /// - `FormatDetection` if the stream is too short or its gzip header is
    ///   invalid (nothing has been written at that point)
    /// - `TarParse` if the tar structure is malformed or truncated
    /// - `PathTraversal` if an entry escapes `dest` under
    ///   `TraversalPolicy::Reject`
    /// - `DirectoryCreate`, `FileCreate`, `FileWrite` or `FileClose` for
    ///   filesystem failures
    pub fn extract<R: Read>(&self, reader: R, dest: impl AsRef<Path>) -> Result<ExtractionReport> {
        let start = Instant::now();
        let dest = dest.as_ref();

        let source = ArchiveSource::open(reader)?;
        let format = source.archive_type();
        debug!(format = format.name(), dest = %dest.display(), "archive format detected");

        let mut archive = TarReader::new(source);
        let mut report = ExtractionReport::new();
        let mut buffer = CopyBuffer::new();

        for entry in archive.entries()? {
            let mut entry = entry?;
            self.extract_entry(&mut entry, dest, &mut buffer, &mut report)?;
        }

        report.duration = start.elapsed();
        info!(
            format = format.name(),
            files = report.files_extracted,
            directories = report.directories_created,
            bytes = report.bytes_written,
            elapsed_ms = report.duration.as_millis(),
            "extraction complete"
        );

        Ok(report)
    }

    fn extract_entry<R: Read>(
        &self,
        entry: &mut TarEntry<'_, R>,
        dest: &Path,
        buffer: &mut CopyBuffer,
        report: &mut ExtractionReport,
    ) -> Result<()> {
        let meta = &entry.meta;
        let resolved = EntryPath::resolve(&meta.path, self.options.traversal)?;
        debug!(
            path = %meta.path,
            resolved = resolved.as_str(),
            kind = ?meta.kind,
            size = meta.size,
            "entry"
        );

        if resolved.is_root() {
            if meta.kind.is_directory() {
                create_directory(dest)?;
            }
            debug!(path = %meta.path, "entry resolves to destination root, skipped");
            report.entries_skipped += 1;
            return Ok(());
        }

        let output = resolved.join_onto(dest);
        if let Some(parent) = output.parent() {
            create_directory(parent)?;
        }

        if meta.kind.is_directory() {
            create_directory(&output)?;
            report.directories_created += 1;
            return Ok(());
        }

        let (file, retried) = create_file(&output, self.retry_delay)?;
        if retried {
            report.create_retries += 1;
        }

        let (size, mode, mtime) = (meta.size, meta.mode, meta.mtime);
        let written = write_contents(&mut entry.data, file, &output, size, buffer)?;
        report.files_extracted += 1;
        report.bytes_written += written;

        if self.options.preserve_permissions {
            report.permissions.record(restore_permissions(&output, mode));
        }
        if self.options.preserve_mtime {
            report.mtimes.record(restore_mtime(&output, mtime));
        }

        Ok(())
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}
