//! Tar entry stream.
//!
//! Wraps `tar::Archive` as a forward-only, lazy sequence of entries. Each
//! item pairs the parsed header metadata with a reader over the entry data.
//! The data must be consumed (or dropped) before the next item is requested;
//! the underlying parser skips whatever is left unread.

use std::io::Read;

use crate::ExtractionError;
use crate::Result;
use crate::types::ArchiveEntry;
use crate::types::EntryKind;

/// Tar archive reader over any byte source.
pub struct TarReader<R: Read> {
    archive: tar::Archive<R>,
}

impl<R: Read> TarReader<R> {
    /// Creates a reader over plain tar bytes.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self {
            archive: tar::Archive::new(source),
        }
    }

    /// Starts iterating entries from the current stream position.
    ///
    /// The sequence can only be walked once; there is no rewind.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::TarParse` if the archive cannot be iterated.
    pub fn entries(&mut self) -> Result<TarEntries<'_, R>> {
        let inner = self.archive.entries().map_err(ExtractionError::parse)?;
        Ok(TarEntries { inner })
    }
}

/// Lazy sequence of tar entries in archive order.
pub struct TarEntries<'a, R: 'a + Read> {
    inner: tar::Entries<'a, R>,
}

/// One tar entry: header metadata plus a reader over its content.
pub struct TarEntry<'a, R: 'a + Read> {
    /// Parsed header metadata.
    pub meta: ArchiveEntry,
    /// Entry content, limited to the declared size.
    pub data: tar::Entry<'a, R>,
}

impl<'a, R: Read> Iterator for TarEntries<'a, R> {
    type Item = Result<TarEntry<'a, R>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let data = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(ExtractionError::parse(e))),
            };

            // PAX global headers describe the archive, not a filesystem object
            if data.header().entry_type() == tar::EntryType::XGlobalHeader {
                continue;
            }

            return Some(read_meta(&data).map(|meta| TarEntry { meta, data }));
        }
    }
}

/// Extracts header metadata from a tar entry.
///
/// Long names from GNU or PAX extension records are already applied by the
/// parser at this point.
fn read_meta<R: Read>(entry: &tar::Entry<'_, R>) -> Result<ArchiveEntry> {
    let header = entry.header();
    let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
    let mode = header.mode().map_err(ExtractionError::parse)?;
    let mtime = header.mtime().map_err(ExtractionError::parse)?;
    let kind = EntryKind::from_tar(header.entry_type(), &path);

    Ok(ArchiveEntry {
        path,
        kind,
        size: entry.size(),
        mode,
        mtime,
    })
}
