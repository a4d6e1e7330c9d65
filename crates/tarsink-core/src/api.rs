//! High-level public API for archive extraction.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use crate::ExtractOptions;
use crate::ExtractionReport;
use crate::Extractor;
use crate::Result;

/// Extracts a tar or tar.gz stream into `dest` with default options.
///
/// The format is detected from the stream itself. Entry paths climbing above
/// `dest` are rejected; permission bits and modification times are restored
/// on a best-effort basis.
///
/// # Errors
///
/// Returns the first fatal error encountered; see [`Extractor::extract`].
///
/// # Examples
///
/// ```
/// use tarsink_core::extract;
/// use tarsink_core::test_utils::TarTestBuilder;
///
/// let archive = TarTestBuilder::new().add_file("hello.txt", b"hi").build();
/// let dest = tempfile::tempdir()?;
///
/// let report = extract(archive.as_slice(), dest.path())?;
/// assert_eq!(report.files_extracted, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extract<R: Read>(reader: R, dest: impl AsRef<Path>) -> Result<ExtractionReport> {
    extract_with_options(reader, dest, &ExtractOptions::default())
}

/// Extracts a tar or tar.gz stream into `dest` with explicit options.
///
/// # Errors
///
/// Returns the first fatal error encountered; see [`Extractor::extract`].
pub fn extract_with_options<R: Read>(
    reader: R,
    dest: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<ExtractionReport> {
    Extractor::new(options.clone()).extract(reader, dest)
}

/// Opens the archive at `archive_path` and extracts it into `dest`.
///
/// # Errors
///
/// Returns `ExtractionError::Io` if the archive file cannot be opened, or
/// the first fatal extraction error.
///
/// # Examples
///
/// ```no_run
/// use tarsink_core::ExtractOptions;
/// use tarsink_core::extract_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_file("logs.tar.gz", "/tmp/output", &ExtractOptions::default())?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_file(
    archive_path: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<ExtractionReport> {
    let file = File::open(archive_path.as_ref())?;
    extract_with_options(BufReader::new(file), dest, options)
}
