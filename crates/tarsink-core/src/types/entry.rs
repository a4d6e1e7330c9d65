//! Archive entry metadata.

use super::EntryKind;

/// Metadata of one record parsed from a tar stream.
///
/// The content of the entry is not part of this type; it is read from the
/// stream by the extraction loop right after the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path as stored in the archive, before resolution.
    pub path: String,

    /// Entry kind.
    pub kind: EntryKind,

    /// Declared content length in bytes.
    pub size: u64,

    /// Permission bits, including setuid, setgid and sticky.
    pub mode: u32,

    /// Modification time in seconds since the Unix epoch.
    pub mtime: u64,
}
