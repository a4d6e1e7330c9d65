//! Error conversion utilities for CLI.
//!
//! Converts tarsink-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use tarsink_core::ExtractionError;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    let archive = if archive == Path::new("-") {
        "<stdin>".to_string()
    } else {
        archive.display().to_string()
    };

    match err {
        ExtractionError::PathTraversal { path } => {
            anyhow!(
                "Security violation: Archive '{archive}' attempted path traversal with '{}'\n\
                 HINT: Do not extract from untrusted sources. Use --clamp-traversal to keep \
                 such entries inside the output directory.",
                path.display()
            )
        }
        ExtractionError::FormatDetection { reason, .. } => {
            anyhow!(
                "Not a tar or tar.gz archive: '{archive}': {reason}\n\
                 HINT: Supported formats: tar, tar.gz"
            )
        }
        ExtractionError::TarParse { source } => {
            anyhow!(
                "Invalid archive '{archive}': {source}\n\
                 HINT: The archive may be truncated or corrupted. Files extracted before \
                 the failure were kept."
            )
        }
        ExtractionError::FileCreate { path, source } => {
            anyhow!(
                "Cannot create '{}' while extracting '{archive}': {source}\n\
                 HINT: Check that the output directory is writable and that no directory \
                 occupies that path.",
                path.display()
            )
        }
        ExtractionError::DirectoryCreate { path, source } => {
            anyhow!(
                "Cannot create directory '{}' while extracting '{archive}': {source}\n\
                 HINT: A file may already exist where the archive expects a directory.",
                path.display()
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!("I/O error while processing '{archive}': {io_err}")
        }
        _ => anyhow::Error::from(err).context(format!("Error processing archive '{archive}'")),
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}
