//! Archive format detection by magic bytes.

use std::io::Read;

use crate::ExtractionError;
use crate::Result;
use crate::io::PeekReader;

/// Gzip magic bytes (RFC 1952, ID1 and ID2).
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Number of bytes inspected to pick a format.
pub const SNIFF_LEN: usize = GZIP_MAGIC.len();

/// Length of the fixed part of a gzip member header.
const GZIP_HEADER_LEN: usize = 10;

/// Deflate, the only compression method defined for gzip.
const GZIP_CM_DEFLATE: u8 = 8;

/// FLG bits 5-7 are reserved and must be zero.
const GZIP_FLG_RESERVED: u8 = 0xE0;

/// Supported archive envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    /// Tar archive (uncompressed).
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
}

impl ArchiveType {
    /// Classifies a stream prefix of at least [`SNIFF_LEN`] bytes.
    ///
    /// Anything that does not start with the gzip magic is treated as raw
    /// tar; the tar parser reports whether it really is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarsink_core::formats::detect::ArchiveType;
    ///
    /// assert_eq!(ArchiveType::from_magic(&[0x1f, 0x8b, 0x08]), ArchiveType::TarGz);
    /// assert_eq!(ArchiveType::from_magic(b"logs/"), ArchiveType::Tar);
    /// ```
    #[must_use]
    pub fn from_magic(prefix: &[u8]) -> Self {
        if prefix.starts_with(&GZIP_MAGIC) {
            Self::TarGz
        } else {
            Self::Tar
        }
    }

    /// Returns a human-readable name for this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
        }
    }
}

/// Detects the archive type by peeking at the start of a stream.
///
/// Nothing is consumed: the peeked bytes are replayed to the next reader.
///
/// # Errors
///
/// Returns `ExtractionError::FormatDetection` if fewer than [`SNIFF_LEN`]
/// bytes are available or the stream fails while peeking.
pub fn sniff<R: Read>(reader: &mut PeekReader<R>) -> Result<ArchiveType> {
    let prefix = reader
        .peek(SNIFF_LEN)
        .map_err(|e| ExtractionError::detection("failed to read stream prefix", Some(e)))?;

    if prefix.len() < SNIFF_LEN {
        return Err(ExtractionError::detection(
            format!(
                "stream too short: expected at least {SNIFF_LEN} bytes, got {}",
                prefix.len()
            ),
            None,
        ));
    }

    Ok(ArchiveType::from_magic(prefix))
}

/// Validates the fixed 10-byte gzip header without consuming it.
///
/// Optional header fields (extra, name, comment) are left to the decoder.
///
/// # Errors
///
/// Returns `ExtractionError::FormatDetection` if the header is truncated,
/// names a compression method other than deflate, or sets reserved flags.
pub fn check_gzip_header<R: Read>(reader: &mut PeekReader<R>) -> Result<()> {
    let header = reader
        .peek(GZIP_HEADER_LEN)
        .map_err(|e| ExtractionError::detection("failed to read gzip header", Some(e)))?;

    if header.len() < GZIP_HEADER_LEN || !header.starts_with(&GZIP_MAGIC) {
        return Err(ExtractionError::detection("truncated gzip header", None));
    }
    if header[2] != GZIP_CM_DEFLATE {
        return Err(ExtractionError::detection(
            format!("unsupported gzip compression method {}", header[2]),
            None,
        ));
    }
    if header[3] & GZIP_FLG_RESERVED != 0 {
        return Err(ExtractionError::detection(
            "reserved gzip header flags set",
            None,
        ));
    }

    Ok(())
}
