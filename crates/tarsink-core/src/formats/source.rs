//! Decodable byte sources for the tar parser.
//!
//! The tar parser always sees plain tar bytes. Whether those come straight
//! from the input or through a gzip decoder is decided once, up front, by
//! sniffing the stream prefix.

use std::io;
use std::io::Read;

use flate2::read::MultiGzDecoder;

use super::detect::ArchiveType;
use super::detect::check_gzip_header;
use super::detect::sniff;
use crate::ExtractionError;
use crate::Result;
use crate::io::PeekReader;

/// Tar byte source, raw or gzip-decoded.
///
/// Gzip input may consist of several concatenated members; all of them are
/// decoded in sequence.
///
/// # Examples
///
/// ```
/// use std::io::Read;
/// use tarsink_core::formats::detect::ArchiveType;
/// use tarsink_core::formats::source::ArchiveSource;
///
/// let mut source = ArchiveSource::open(&b"plain bytes"[..])?;
/// assert_eq!(source.archive_type(), ArchiveType::Tar);
///
/// let mut out = String::new();
/// source.read_to_string(&mut out)?;
/// assert_eq!(out, "plain bytes");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub enum ArchiveSource<R: Read> {
    /// Uncompressed tar bytes.
    Raw(PeekReader<R>),
    /// Gzip-framed tar bytes, decoded on the fly.
    Gzip(MultiGzDecoder<PeekReader<R>>),
}

impl<R: Read> ArchiveSource<R> {
    /// Sniffs `reader` and wraps it in the matching decoder.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::FormatDetection` if the stream is shorter
    /// than the magic prefix, or if it carries the gzip magic but the gzip
    /// header (including its optional name, comment, extra and CRC fields)
    /// cannot be parsed.
    pub fn open(reader: R) -> Result<Self> {
        let mut reader = PeekReader::new(reader);

        match sniff(&mut reader)? {
            ArchiveType::Tar => Ok(Self::Raw(reader)),
            ArchiveType::TarGz => {
                check_gzip_header(&mut reader)?;
                // the decoder consumes the full member header on construction
                let decoder = MultiGzDecoder::new(reader);
                if decoder.header().is_none() {
                    return Err(ExtractionError::detection("invalid gzip header", None));
                }
                Ok(Self::Gzip(decoder))
            }
        }
    }

    /// Returns the detected envelope.
    #[must_use]
    pub const fn archive_type(&self) -> ArchiveType {
        match self {
            Self::Raw(_) => ArchiveType::Tar,
            Self::Gzip(_) => ArchiveType::TarGz,
        }
    }
}

impl<R: Read> Read for ArchiveSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Raw(reader) => reader.read(buf),
            Self::Gzip(decoder) => decoder.read(buf),
        }
    }
}
