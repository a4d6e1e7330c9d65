//! Types describing archive entries and where they land.
//!
//! `EntryPath` follows the validated-newtype pattern: it can only be built
//! through resolution, so every path handed to the filesystem has already
//! been normalized and checked against the destination root.

pub mod entry;
pub mod entry_kind;
pub mod entry_path;

pub use entry::ArchiveEntry;
pub use entry_kind::EntryKind;
pub use entry_path::EntryPath;
