//! Filesystem materialization of directories and files.

use std::fs::DirBuilder;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Read;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::ExtractionError;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_buffer;

/// Delay before the single retry of a failed file creation.
pub const CREATE_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Output file write buffer size (64KB).
const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Mode for directories created during extraction.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Creates `path` and all missing ancestors.
///
/// Succeeds if the directory already exists.
pub(crate) fn create_directory(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|source| ExtractionError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })
}

/// Creates or truncates the output file, retrying once after `retry_delay`.
///
/// Returns the open file and whether the retry was needed.
pub(crate) fn create_file(path: &Path, retry_delay: Duration) -> Result<(File, bool)> {
    match File::create(path) {
        Ok(file) => return Ok((file, false)),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                delay_ms = retry_delay.as_millis(),
                "file create failed, retrying once"
            );
        }
    }

    thread::sleep(retry_delay);

    File::create(path)
        .map(|file| (file, true))
        .map_err(|source| ExtractionError::FileCreate {
            path: path.to_path_buf(),
            source,
        })
}

/// Copies exactly `declared` bytes of entry content into `file` and closes it.
///
/// Returns the number of bytes written.
pub(crate) fn write_contents<R: Read + ?Sized>(
    data: &mut R,
    file: File,
    path: &Path,
    declared: u64,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    let copied = copy_with_buffer(data, &mut writer, buffer).map_err(|e| match e {
        CopyError::Read(source) => ExtractionError::parse(source),
        CopyError::Write(source) => ExtractionError::FileWrite {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if copied != declared {
        return Err(ExtractionError::parse(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("entry data truncated: expected {declared} bytes, got {copied}"),
        )));
    }

    let file = writer
        .into_inner()
        .map_err(|e| ExtractionError::FileClose {
            path: path.to_path_buf(),
            source: e.into_error(),
        })?;
    drop(file);

    Ok(copied)
}
