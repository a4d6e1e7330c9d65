//! Archive format handling.
//!
//! Detection picks the envelope (raw tar or gzip), `source` wraps the input
//! in the matching decoder, and `tar` walks the decoded entry stream.

pub mod detect;
pub mod source;
pub mod tar;

pub use detect::ArchiveType;
pub use source::ArchiveSource;
