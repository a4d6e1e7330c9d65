//! Entry content copy with a reusable buffer.
//!
//! Unlike `std::io::copy`, the copy loop here keeps read failures and write
//! failures apart. A read failure means the archive stream is broken; a write
//! failure means the destination filesystem is. Extraction reports the two
//! differently.

use std::io;
use std::io::Read;
use std::io::Write;

/// Buffer size for entry copies (64KB).
///
/// Matches typical filesystem block sizes and is a multiple of the tar
/// block size.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable buffer for copying entry content.
///
/// One buffer is allocated per extraction run and shared by all entries.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of a copy failed.
#[derive(Debug)]
pub enum CopyError {
    /// Reading from the source failed.
    Read(io::Error),
    /// Writing to the destination failed.
    Write(io::Error),
}

/// Copies all bytes from `reader` to `writer` using `buffer`.
///
/// Returns the number of bytes copied. `Interrupted` reads are retried.
///
/// # Errors
///
/// Returns `CopyError::Read` or `CopyError::Write` depending on which side
/// failed.
///
/// # Examples
///
/// ```
/// use tarsink_core::copy::CopyBuffer;
/// use tarsink_core::copy::copy_with_buffer;
///
/// let mut buffer = CopyBuffer::new();
/// let mut input = &b"hello"[..];
/// let mut output = Vec::new();
///
/// let copied = copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap();
/// assert_eq!(copied, 5);
/// assert_eq!(output, b"hello");
/// ```
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, CopyError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(CopyError::Write)?;

        total += bytes_read as u64;
    }

    Ok(total)
}
