//! Error types for archive extraction operations.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur during archive extraction.
///
/// Every variant is fatal: extraction stops at the first error and the
/// destination tree keeps whatever was written before it.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The stream is too short to sniff, or it declares gzip but the gzip
    /// header cannot be read.
    #[error("format detection failed: {reason}")]
    FormatDetection {
        /// What went wrong while sniffing the stream.
        reason: String,
        /// Underlying I/O error, if any.
        #[source]
        source: Option<io::Error>,
    },

    /// The tar structure is malformed or the stream ended mid-entry.
    #[error("malformed tar stream: {source}")]
    TarParse {
        /// Underlying parse or read error.
        #[source]
        source: io::Error,
    },

    /// Recursive directory creation failed.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// File creation failed, including the single delayed retry.
    #[error("failed to create file {path}: {source}")]
    FileCreate {
        /// File that could not be created.
        path: PathBuf,
        /// Error from the last attempt.
        #[source]
        source: io::Error,
    },

    /// Writing entry content to the output file failed.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Flushing or closing the output file failed after its content was
    /// written.
    #[error("failed to close file {path}: {source}")]
    FileClose {
        /// File being closed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An entry path resolves outside the destination directory.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// Entry path as stored in the archive.
        path: PathBuf,
    },

    /// I/O failure outside the entry loop, such as opening the archive file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ExtractionError {
    pub(crate) fn detection(reason: impl Into<String>, source: Option<io::Error>) -> Self {
        Self::FormatDetection {
            reason: reason.into(),
            source,
        }
    }

    pub(crate) const fn parse(source: io::Error) -> Self {
        Self::TarParse { source }
    }

    /// Returns `true` if the stream could not be recognised as tar or tar.gz.
    ///
    /// # Examples
    ///
    /// ```
    /// let err = tarsink_core::extract(&b"x"[..], "/tmp/unused").unwrap_err();
    /// assert!(err.is_format_error());
    /// ```
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::FormatDetection { .. })
    }

    /// Returns the filesystem path the error refers to, if any.
    ///
    /// For [`ExtractionError::PathTraversal`] this is the path as stored in
    /// the archive; for the filesystem variants it is the output path.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::DirectoryCreate { path, .. }
            | Self::FileCreate { path, .. }
            | Self::FileWrite { path, .. }
            | Self::FileClose { path, .. }
            | Self::PathTraversal { path } => Some(path),
            Self::FormatDetection { .. } | Self::TarParse { .. } | Self::Io(_) => None,
        }
    }
}
